//! The value set under validation
//!
//! A [`ValueSet`] is the record being checked: a mapping from field names
//! to values of one caller-chosen type. For heterogeneous records the
//! usual choice is `serde_json::Value`; homogeneous records can use a
//! plain `i64`, `String`, or any other type directly.
//!
//! Presence is an explicit own-key test: a field is present exactly when
//! it was inserted into this set. There are no inherited or default
//! members to confuse the test.
//!
//! ```rust
//! use linesman::ValueSet;
//!
//! let values: ValueSet<i64> = ValueSet::new()
//!     .with("number", 12)
//!     .with("yards", 250);
//!
//! assert!(values.contains_field("number"));
//! assert!(!values.contains_field("completions"));
//! assert_eq!(values.get("yards"), Some(&250));
//! ```

use std::collections::HashMap;

#[cfg(feature = "serde")]
mod serde_impl;

/// A record of observed values, keyed by field name.
///
/// Read-only to the validator: [`validate`](crate::validate) borrows it
/// and never mutates or retains it. Storage order is irrelevant to
/// validation output; only the [`RuleSet`](crate::RuleSet)'s definition
/// order determines message order.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueSet<V> {
    values: HashMap<String, V>,
}

impl<V> ValueSet<V> {
    /// Create an empty value set.
    pub fn new() -> Self {
        ValueSet {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// use linesman::ValueSet;
    ///
    /// let values = ValueSet::new()
    ///     .with("position", "QB")
    ///     .with("ranking", "GOAT");
    /// assert_eq!(values.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: V) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Insert a value, returning the previous value for the field if any.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.values.insert(name.into(), value)
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.values.remove(name)
    }

    /// The value for a field, if present.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    /// Whether a value was explicitly set for `name`.
    pub fn contains_field(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of fields with values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the value set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(field, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V> Default for ValueSet<V> {
    fn default() -> Self {
        ValueSet::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for ValueSet<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<V> From<HashMap<String, V>> for ValueSet<V> {
    fn from(values: HashMap<String, V>) -> Self {
        ValueSet { values }
    }
}

impl<V, S: Into<String>> FromIterator<(S, V)> for ValueSet<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut values = ValueSet::new();
        values.extend(iter);
        values
    }
}

impl<V, S: Into<String>> Extend<(S, V)> for ValueSet<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.values.insert(name.into(), value);
        }
    }
}
