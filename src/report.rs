//! The validator
//!
//! [`validate`] walks a [`RuleSet`] in definition order and collects one
//! message per failing field. Passing fields contribute nothing, and no
//! failure stops the walk, so the caller always sees every problem at
//! once.
//!
//! ```rust
//! use linesman::{validate, RuleSet, ValueSet};
//! use linesman::predicate::eq;
//!
//! let values: ValueSet<String> = ValueSet::new()
//!     .with("position", String::from("RB"));
//!
//! let rules = RuleSet::new()
//!     .field_msg("position", eq(String::from("QB")), "wrong position")
//!     .field("ranking", eq(String::from("GOAT")));
//!
//! assert_eq!(
//!     validate(&values, &rules),
//!     vec![
//!         "wrong position".to_string(),
//!         "No value for 'ranking'".to_string(),
//!     ]
//! );
//! ```

use crate::rule::RuleSet;
use crate::values::ValueSet;

/// Ordered list of failure messages, one per failing field.
pub type Errors = Vec<String>;

/// Validate a value set against a rule set.
///
/// For each rule, in the rule set's definition order:
///
/// - field present, predicate passes: nothing is appended;
/// - field present, predicate fails: the rule's custom message, or
///   `Invalid value for <field>`;
/// - field missing: the rule's custom message, or
///   `No value for '<field>'`.
///
/// Pure function of its two inputs; neither argument is mutated and no
/// state survives the call. A rule whose predicate panics propagates the
/// panic unchanged.
pub fn validate<V>(values: &ValueSet<V>, rules: &RuleSet<V>) -> Errors {
    let mut errors = Errors::new();
    for (name, rule) in rules.iter() {
        match values.get(name) {
            Some(value) => {
                if !rule.check(value) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(field = name, custom = rule.message().is_some(), "rule failed");
                    errors.push(failure_message(rule.message(), || {
                        format!("Invalid value for {name}")
                    }));
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(field = name, custom = rule.message().is_some(), "field missing");
                errors.push(failure_message(rule.message(), || {
                    format!("No value for '{name}'")
                }));
            }
        }
    }
    errors
}

fn failure_message(custom: Option<&str>, default: impl FnOnce() -> String) -> String {
    match custom {
        Some(message) => message.to_string(),
        None => default(),
    }
}
