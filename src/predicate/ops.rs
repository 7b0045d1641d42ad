//! Ready-made predicates for common comparisons
//!
//! Comparison predicates work on any `PartialEq`/`PartialOrd` type; the
//! string predicates implement [`Predicate`] for both `str` and `String`
//! so they slot into rules over either.

use super::combinators::Predicate;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Value must equal `expected`.
///
/// ```rust
/// use linesman::predicate::{eq, Predicate};
///
/// assert!(eq(12).check(&12));
/// assert!(!eq(12).check(&11));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(expected: T) -> Eq<T> {
    Eq(expected)
}

/// Predicate for inequality.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Value must not equal `rejected`.
pub fn ne<T: PartialEq + Send + Sync>(rejected: T) -> Ne<T> {
    Ne(rejected)
}

/// Predicate for strictly greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Value must be strictly greater than `threshold`.
///
/// ```rust
/// use linesman::predicate::{gt, Predicate};
///
/// assert!(gt(1000).check(&1200));
/// assert!(!gt(1000).check(&1000));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(threshold: T) -> Gt<T> {
    Gt(threshold)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Value must be greater than or equal to `threshold`.
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

/// Predicate for strictly less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Value must be strictly less than `threshold`.
pub fn lt<T: PartialOrd + Send + Sync>(threshold: T) -> Lt<T> {
    Lt(threshold)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Value must be less than or equal to `threshold`.
pub fn le<T: PartialOrd + Send + Sync>(threshold: T) -> Le<T> {
    Le(threshold)
}

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T>(pub T, pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0 && *value <= self.1
    }
}

/// Value must lie in `lo..=hi`.
///
/// ```rust
/// use linesman::predicate::{between, Predicate};
///
/// assert!(between(1, 99).check(&12));
/// assert!(between(1, 99).check(&1));
/// assert!(!between(1, 99).check(&0));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(lo: T, hi: T) -> Between<T> {
    Between(lo, hi)
}

/// Predicate for a non-empty string.
#[derive(Clone, Copy, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// String must not be empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate for a minimum string length.
#[derive(Clone, Copy, Debug)]
pub struct LenMin(pub usize);

impl Predicate<str> for LenMin {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.len() >= self.0
    }
}

impl Predicate<String> for LenMin {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.len() >= self.0
    }
}

/// String must be at least `min` bytes long.
///
/// ```rust
/// use linesman::predicate::{len_min, Predicate};
///
/// assert!(len_min(5).check("Tom Brady"));
/// assert!(!len_min(5).check("Tom"));
/// ```
pub fn len_min(min: usize) -> LenMin {
    LenMin(min)
}

/// Predicate for a maximum string length.
#[derive(Clone, Copy, Debug)]
pub struct LenMax(pub usize);

impl Predicate<str> for LenMax {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.len() <= self.0
    }
}

impl Predicate<String> for LenMax {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.len() <= self.0
    }
}

/// String must be at most `max` bytes long.
pub fn len_max(max: usize) -> LenMax {
    LenMax(max)
}

/// Predicate for a substring match.
#[derive(Clone, Debug)]
pub struct Contains(pub String);

impl Predicate<str> for Contains {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_str())
    }
}

impl Predicate<String> for Contains {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.contains(self.0.as_str())
    }
}

/// String must contain `needle`.
///
/// ```rust
/// use linesman::predicate::{contains, Predicate};
///
/// assert!(contains("@").check("tb12@patriots.example"));
/// assert!(!contains("@").check("not an email"));
/// ```
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains(needle.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons() {
        assert!(eq("QB").check(&"QB"));
        assert!(ne(11).check(&12));
        assert!(gt(1000).check(&1001));
        assert!(!gt(1000).check(&1000));
        assert!(ge(1000).check(&1000));
        assert!(lt(100).check(&99));
        assert!(!lt(100).check(&100));
        assert!(le(100).check(&100));
    }

    #[test]
    fn test_between_is_inclusive() {
        let p = between(1, 99);
        assert!(p.check(&1));
        assert!(p.check(&99));
        assert!(!p.check(&0));
        assert!(!p.check(&100));
    }

    #[test]
    fn test_string_predicates_on_str_and_string() {
        assert!(not_empty().check("x"));
        assert!(!not_empty().check(&String::new()));

        assert!(len_min(4).check(&String::from("GOAT")));
        assert!(!len_min(5).check("GOAT"));
        assert!(len_max(4).check("GOAT"));

        assert!(contains("rady").check(&String::from("Tom Brady")));
        assert!(!contains("rady").check("Tom"));
    }
}
