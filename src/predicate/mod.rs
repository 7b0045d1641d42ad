//! Composable predicates for rule definitions
//!
//! A [`Predicate`] is anything that can answer yes/no about a borrowed
//! value. Closures of type `Fn(&V) -> bool` are predicates out of the box,
//! and the ready-made constructors in this module cover the common
//! comparisons so most rules never need a hand-written closure.
//!
//! Predicates combine with logical operators through [`PredicateExt`]:
//!
//! ```rust
//! use linesman::predicate::{ge, le, Predicate, PredicateExt};
//!
//! let valid_jersey = ge(1).and(le(99));
//! assert!(valid_jersey.check(&12));
//! assert!(!valid_jersey.check(&0));
//! ```
//!
//! # Use in rules
//!
//! ```rust
//! use linesman::{RuleSet, ValueSet};
//! use linesman::predicate::{len_min, not_empty, PredicateExt};
//!
//! let rules = RuleSet::new()
//!     .field_msg(
//!         "username",
//!         PredicateExt::<String>::and(not_empty(), len_min(3)),
//!         "username too short",
//!     )
//!     .field("team", not_empty());
//!
//! let values = ValueSet::new()
//!     .with("username", String::from("tb"))
//!     .with("team", String::from("Patriots"));
//!
//! assert_eq!(rules.check(&values), vec!["username too short".to_string()]);
//! ```

mod combinators;
mod ops;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use ops::{
    between, contains, eq, ge, gt, le, len_max, len_min, lt, ne, not_empty, Between, Contains, Eq,
    Ge, Gt, Le, LenMax, LenMin, Lt, Ne, NotEmpty,
};
