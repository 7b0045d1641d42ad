//! Rules and the ordered rule set
//!
//! A [`Rule`] pairs a [`Predicate`] with an optional custom failure
//! message. A [`RuleSet`] maps field names to rules and remembers the
//! order the fields were defined in; that definition order is the order
//! of the messages [`validate`](crate::validate) produces.
//!
//! ```rust
//! use linesman::{RuleSet, ValueSet};
//! use linesman::predicate::eq;
//!
//! let rules = RuleSet::new()
//!     .field_msg("position", eq(String::from("QB")), "wrong position")
//!     .field("ranking", eq(String::from("GOAT")));
//!
//! let values = ValueSet::new()
//!     .with("position", String::from("RB"))
//!     .with("ranking", String::from("GOAT"));
//!
//! assert_eq!(rules.check(&values), vec!["wrong position".to_string()]);
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::predicate::Predicate;
use crate::report::Errors;
use crate::values::ValueSet;

/// A single validation rule: a predicate plus an optional failure message.
///
/// When the message is absent, [`validate`](crate::validate) falls back to
/// the built-in templates (`Invalid value for <field>` when the field is
/// present but fails the predicate, `No value for '<field>'` when the
/// field is missing).
pub struct Rule<V> {
    predicate: Box<dyn Predicate<V>>,
    message: Option<String>,
}

impl<V> Rule<V> {
    /// Create a rule that reports failures with the default templates.
    ///
    /// ```rust
    /// use linesman::Rule;
    ///
    /// let rule = Rule::new(|yards: &i64| *yards > 1000);
    /// assert!(rule.check(&1200));
    /// assert!(rule.message().is_none());
    /// ```
    pub fn new(predicate: impl Predicate<V> + 'static) -> Self {
        Rule {
            predicate: Box::new(predicate),
            message: None,
        }
    }

    /// Create a rule with a custom failure message.
    ///
    /// The message is used both when the predicate fails and when the
    /// field is missing from the value set.
    ///
    /// ```rust
    /// use linesman::Rule;
    ///
    /// let rule = Rule::with_message(|n: &i64| *n == 12, "wrong number");
    /// assert_eq!(rule.message(), Some("wrong number"));
    /// ```
    pub fn with_message(
        predicate: impl Predicate<V> + 'static,
        message: impl Into<String>,
    ) -> Self {
        Rule {
            predicate: Box::new(predicate),
            message: Some(message.into()),
        }
    }

    /// The custom failure message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run the rule's predicate against a value.
    #[inline]
    pub fn check(&self, value: &V) -> bool {
        self.predicate.check(value)
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// An ordered mapping from field names to [`Rule`]s.
///
/// Iteration order is definition order. Redefining a field replaces its
/// rule but keeps the field's original position, matching the semantics
/// of a record literal with a duplicated key.
///
/// The rule set holds no validation state; [`check`](RuleSet::check) is a
/// pure function of the rule set and the value set it is given.
pub struct RuleSet<V> {
    rules: IndexMap<String, Rule<V>>,
}

impl<V> RuleSet<V> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        RuleSet {
            rules: IndexMap::new(),
        }
    }

    /// Add a rule that reports failures with the default templates.
    pub fn field(
        mut self,
        name: impl Into<String>,
        predicate: impl Predicate<V> + 'static,
    ) -> Self {
        self.rules.insert(name.into(), Rule::new(predicate));
        self
    }

    /// Add a rule with a custom failure message.
    pub fn field_msg(
        mut self,
        name: impl Into<String>,
        predicate: impl Predicate<V> + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.rules
            .insert(name.into(), Rule::with_message(predicate, message));
        self
    }

    /// Insert a pre-built rule, returning the replaced rule if the field
    /// was already defined.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule<V>) -> Option<Rule<V>> {
        self.rules.insert(name.into(), rule)
    }

    /// The rule for a field, if one is defined.
    pub fn get(&self, name: &str) -> Option<&Rule<V>> {
        self.rules.get(name)
    }

    /// Whether a rule is defined for `name`.
    pub fn contains_field(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Iterate over `(field, rule)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule<V>)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of defined rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate a value set against these rules.
    ///
    /// Equivalent to [`validate(values, self)`](crate::validate).
    pub fn check(&self, values: &ValueSet<V>) -> Errors {
        crate::report::validate(values, self)
    }
}

impl<V> Default for RuleSet<V> {
    fn default() -> Self {
        RuleSet::new()
    }
}

impl<V> fmt::Debug for RuleSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules.iter()).finish()
    }
}

impl<V, S: Into<String>> FromIterator<(S, Rule<V>)> for RuleSet<V> {
    fn from_iter<I: IntoIterator<Item = (S, Rule<V>)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        rules.extend(iter);
        rules
    }
}

impl<V, S: Into<String>> Extend<(S, Rule<V>)> for RuleSet<V> {
    fn extend<I: IntoIterator<Item = (S, Rule<V>)>>(&mut self, iter: I) {
        for (name, rule) in iter {
            self.rules.insert(name.into(), rule);
        }
    }
}
