//! # Linesman
//!
//! > *The line judge doesn't fix the play. It tells you every flag on it.*
//!
//! A small library for field-by-field record validation: pair a set of
//! observed values with a set of named rules and get back every failure
//! message at once, in the order the rules were defined.
//!
//! ## Philosophy
//!
//! Validation failure is **data, not control flow**: nothing is thrown, no
//! pass short-circuits the rest, and the result is a plain ordered
//! `Vec<String>` you can render directly. The validator itself is a pure
//! function of its two inputs and holds no state between calls.
//!
//! ## Quick Example
//!
//! ```rust
//! use linesman::{validate, RuleSet, ValueSet};
//! use linesman::predicate::{eq, gt};
//!
//! let values: ValueSet<i64> = ValueSet::new()
//!     .with("number", 12)
//!     .with("yards", 250);
//!
//! let rules = RuleSet::new()
//!     .field_msg("number", eq(12), "wrong number")
//!     .field("yards", gt(1000))
//!     .field("completions", gt(0));
//!
//! let errors = validate(&values, &rules);
//! assert_eq!(
//!     errors,
//!     vec![
//!         "Invalid value for yards".to_string(),
//!         "No value for 'completions'".to_string(),
//!     ]
//! );
//! ```
//!
//! Rules without a custom message fall back to the two built-in templates
//! shown above; a rule whose field is missing from the [`ValueSet`] fails
//! with the `No value` template, a present field that fails its predicate
//! with the `Invalid value` template.
//!
//! ## What this crate does not do
//!
//! No schema composition, no nested-record rules, no async predicates, no
//! message localization, no value coercion. A predicate that panics is a
//! caller bug and the panic propagates unchanged.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod report;
pub mod rule;
pub mod values;

// Re-exports
pub use predicate::{Predicate, PredicateExt};
pub use report::{validate, Errors};
pub use rule::{Rule, RuleSet};
pub use values::ValueSet;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::report::{validate, Errors};
    pub use crate::rule::{Rule, RuleSet};
    pub use crate::values::ValueSet;
}
