//! Core predicate trait and logical combinators

/// A yes/no test over borrowed values of type `T`.
///
/// Any `Fn(&T) -> bool + Send + Sync` closure implements this trait, so
/// rules can be written inline:
///
/// ```rust
/// use linesman::predicate::Predicate;
///
/// let is_even = |n: &i64| n % 2 == 0;
/// assert!(is_even.check(&12));
/// assert!(!is_even.check(&11));
/// ```
///
/// The `Send + Sync` supertrait keeps rule sets shareable across threads;
/// validation itself is synchronous and needs no coordination.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check whether the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining combinators for [`Predicate`].
///
/// ```rust
/// use linesman::predicate::{gt, lt, Predicate, PredicateExt};
///
/// let out_of_range = gt(0).and(lt(100)).not();
/// assert!(out_of_range.check(&150));
/// assert!(!out_of_range.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both this predicate and `other` must hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either this predicate or `other` must hold.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert this predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Disjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Negation of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, ge, le, lt};

    #[test]
    fn test_and() {
        let jersey = ge(1).and(le(99));
        assert!(jersey.check(&12));
        assert!(!jersey.check(&0));
        assert!(!jersey.check(&100));
    }

    #[test]
    fn test_or() {
        let p = eq(12).or(eq(10));
        assert!(p.check(&12));
        assert!(p.check(&10));
        assert!(!p.check(&7));
    }

    #[test]
    fn test_not() {
        let p = lt(0).not();
        assert!(p.check(&0));
        assert!(p.check(&5));
        assert!(!p.check(&-5));
    }

    #[test]
    fn test_chained_combinators() {
        // not((1 <= x <= 99) or (x == 0))
        let p = ge(1).and(le(99)).or(eq(0)).not();
        assert!(p.check(&-1));
        assert!(p.check(&100));
        assert!(!p.check(&0));
        assert!(!p.check(&12));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |n: &i64| n % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));

        let even_jersey = is_even.and(ge(1)).and(le(99));
        assert!(even_jersey.check(&12));
        assert!(!even_jersey.check(&-2));
    }
}
