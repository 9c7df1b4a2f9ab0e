//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, its composition
//! methods, and the combinator structs they return.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::adapters::{
    Quantified, RelatedTo, RelatedToAll, RelatedToAny, RelatedToInt, That, ThatRelated,
};
use super::erased::Erased;
use crate::error::CompositionError;
use crate::message::Identity;
use crate::quantifier::{Candidates, Quantifier};
use crate::relation::{ObjIntRelation, Relation};

/// A composable test over values of type T.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::*;
///
/// let short = |s: &str| s.len() < 5;
/// assert!(short.check("abc"));
/// assert!(!short.check("abcdef"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;

    /// Name and default message of this predicate.
    ///
    /// Anonymous unless overridden; built-in checks override it.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
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

/// Extension trait for predicate combinators.
///
/// Every method consumes `self` and returns a new predicate; operands are never
/// modified. Composition is lazy: nothing is evaluated until `check` is called,
/// and the right-hand side of `or` / `and` is only evaluated when needed.
///
/// The result of a composition is anonymous. It does not inherit the name or
/// default message of any operand.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::*;
///
/// let p = (|n: &i32| *n > 0).and(|n: &i32| *n < 100).not();
/// assert!(p.check(&-5));
/// assert!(!p.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Holds when `self` or `other` holds on the same value.
    ///
    /// `other` is not evaluated when `self` holds.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let p = (|n: &i32| *n < 0).or(|n: &i32| *n > 100);
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P, T> {
        Or::new(self, other)
    }

    /// Holds when `self` holds or `other` does not.
    fn or_not<P: Predicate<T>>(self, other: P) -> Or<Self, Not<P, T>, T> {
        Or::new(self, Not::new(other))
    }

    /// Holds when `self` holds or the value has `relation` to `object`.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let starts = |s: &String, p: &&str| s.starts_with(*p);
    /// let p = (|s: &String| s.is_empty()).or_relation(starts, "x");
    /// assert!(p.check(&String::new()));
    /// assert!(p.check(&"xyz".to_string()));
    /// assert!(!p.check(&"abc".to_string()));
    /// ```
    fn or_relation<O, R>(self, relation: R, object: O) -> Or<Self, RelatedTo<R, O>, T>
    where
        O: Send + Sync,
        R: Relation<T, O>,
    {
        Or::new(self, RelatedTo::new(relation, object))
    }

    /// Holds when `self` holds or the value has `relation` to an integer.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let len_is = |s: &str, n: i32| s.len() as i32 == n;
    /// let p = (|s: &str| s.is_empty()).or_relation_int(len_is, 3);
    /// assert!(p.check("abc"));
    /// assert!(!p.check("ab"));
    /// ```
    fn or_relation_int<R>(self, relation: R, object: i32) -> Or<Self, RelatedToInt<R>, T>
    where
        R: ObjIntRelation<T>,
    {
        Or::new(self, RelatedToInt::new(relation, object))
    }

    /// Holds when `self` holds or the value has `relation` to any of the
    /// given objects.
    ///
    /// `more` may be empty.
    fn or_relation_any<O, R, I>(
        self,
        relation: R,
        first: O,
        second: O,
        more: I,
    ) -> Or<Self, RelatedToAny<R, O>, T>
    where
        O: Send + Sync,
        R: Relation<T, O>,
        I: IntoIterator<Item = O>,
    {
        Or::new(self, RelatedToAny::new(relation, inline(first, second, more)))
    }

    /// Holds when `self` holds or `relation` holds from every subject to the
    /// value.
    ///
    /// Each element of `subjects` is the relation's *subject* and the value
    /// under test is its *object*. Fails if `subjects` is empty.
    fn or_all<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<Or<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::All, subjects, relation)?;
        Ok(Or::new(self, quantified))
    }

    /// Holds when `self` holds or `relation` holds from at least one subject
    /// to the value. Fails if `subjects` is empty.
    fn or_any<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<Or<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::Any, subjects, relation)?;
        Ok(Or::new(self, quantified))
    }

    /// Holds when `self` holds or `relation` holds from no subject to the
    /// value. Fails if `subjects` is empty.
    fn or_none<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<Or<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::None, subjects, relation)?;
        Ok(Or::new(self, quantified))
    }

    /// Holds when `self` holds on the value or `test` holds on an unrelated
    /// `value`.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let readable = |path: &&str| path.ends_with(".txt");
    /// let p = readable.or_that(3, |retries: &i32| *retries > 0);
    /// assert!(p.check(&"notes.md"));
    /// ```
    fn or_that<U, P>(self, value: U, test: P) -> Or<Self, That<P, U>, T>
    where
        U: Send + Sync,
        P: Predicate<U>,
    {
        Or::new(self, That::new(value, test))
    }

    /// Holds when `self` holds on the value or `subject` has `relation` to
    /// `object`, both unrelated to the value.
    fn or_that_relation<S, O, R>(
        self,
        subject: S,
        relation: R,
        object: O,
    ) -> Or<Self, ThatRelated<R, S, O>, T>
    where
        S: Send + Sync,
        O: Send + Sync,
        R: Relation<S, O>,
    {
        Or::new(self, ThatRelated::new(subject, relation, object))
    }

    /// Like [`or`](PredicateExt::or), but `other` may be written against any
    /// `'static` type.
    ///
    /// The value is downcast to `U` when `other` is evaluated. If it is not a
    /// `U`, evaluation panics with a [`CastError`](crate::error::CastError)
    /// message. Composition itself never fails.
    fn or_dyn<U, P>(self, other: P) -> Or<Self, Erased<P, U>, T>
    where
        T: Sized + Any,
        U: Any,
        P: Predicate<U>,
    {
        Or::new(self, Erased::new(other))
    }

    /// Holds when both `self` and `other` hold on the same value.
    ///
    /// `other` is not evaluated when `self` fails.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let p = (|n: &i32| *n > 0).and(|n: &i32| *n < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P, T> {
        And::new(self, other)
    }

    /// Holds when `self` holds and `other` does not.
    fn and_not<P: Predicate<T>>(self, other: P) -> And<Self, Not<P, T>, T> {
        And::new(self, Not::new(other))
    }

    /// Holds when `self` holds and the value has `relation` to `object`.
    fn and_relation<O, R>(self, relation: R, object: O) -> And<Self, RelatedTo<R, O>, T>
    where
        O: Send + Sync,
        R: Relation<T, O>,
    {
        And::new(self, RelatedTo::new(relation, object))
    }

    /// Holds when `self` holds and the value has `relation` to an integer.
    fn and_relation_int<R>(self, relation: R, object: i32) -> And<Self, RelatedToInt<R>, T>
    where
        R: ObjIntRelation<T>,
    {
        And::new(self, RelatedToInt::new(relation, object))
    }

    /// Holds when `self` holds and the value has `relation` to every one of
    /// the given objects.
    ///
    /// `more` may be empty.
    fn and_relation_all<O, R, I>(
        self,
        relation: R,
        first: O,
        second: O,
        more: I,
    ) -> And<Self, RelatedToAll<R, O>, T>
    where
        O: Send + Sync,
        R: Relation<T, O>,
        I: IntoIterator<Item = O>,
    {
        And::new(self, RelatedToAll::new(relation, inline(first, second, more)))
    }

    /// Holds when `self` holds and `relation` holds from every subject to the
    /// value. Fails if `subjects` is empty.
    fn and_all<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<And<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::All, subjects, relation)?;
        Ok(And::new(self, quantified))
    }

    /// Holds when `self` holds and `relation` holds from at least one subject
    /// to the value. Fails if `subjects` is empty.
    fn and_any<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<And<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::Any, subjects, relation)?;
        Ok(And::new(self, quantified))
    }

    /// Holds when `self` holds and `relation` holds from no subject to the
    /// value. Fails if `subjects` is empty.
    fn and_none<S, R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<And<Self, Quantified<R, S>, T>, CompositionError>
    where
        S: Send + Sync,
        R: Relation<S, T>,
        I: IntoIterator<Item = S>,
    {
        let quantified = Quantified::new(Quantifier::None, subjects, relation)?;
        Ok(And::new(self, quantified))
    }

    /// Holds when `self` holds on the value and `test` holds on an unrelated
    /// `value`.
    fn and_that<U, P>(self, value: U, test: P) -> And<Self, That<P, U>, T>
    where
        U: Send + Sync,
        P: Predicate<U>,
    {
        And::new(self, That::new(value, test))
    }

    /// Holds when `self` holds on the value and `subject` has `relation` to
    /// `object`, both unrelated to the value.
    fn and_that_relation<S, O, R>(
        self,
        subject: S,
        relation: R,
        object: O,
    ) -> And<Self, ThatRelated<R, S, O>, T>
    where
        S: Send + Sync,
        O: Send + Sync,
        R: Relation<S, O>,
    {
        And::new(self, ThatRelated::new(subject, relation, object))
    }

    /// Like [`and`](PredicateExt::and), but `other` may be written against any
    /// `'static` type. See [`or_dyn`](PredicateExt::or_dyn).
    fn and_dyn<U, P>(self, other: P) -> And<Self, Erased<P, U>, T>
    where
        T: Sized + Any,
        U: Any,
        P: Predicate<U>,
    {
        And::new(self, Erased::new(other))
    }

    /// Invert the predicate.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let p = (|n: &i32| *n > 0).not();
    /// assert!(p.check(&-5));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self, T> {
        Not::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

pub(crate) fn inline<O, I>(first: O, second: O, more: I) -> Candidates<O>
where
    I: IntoIterator<Item = O>,
{
    Candidates::new(first, std::iter::once(second).chain(more).collect())
}

// The value type is carried so that generic checks such as `none()` can be
// composed before the tested type is known.
macro_rules! binary_combinator {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        pub struct $name<P1, P2, T: ?Sized>(pub P1, pub P2, PhantomData<fn(&T) -> bool>);

        impl<P1, P2, T: ?Sized> $name<P1, P2, T> {
            /// Combine two predicates over `T`.
            pub fn new(left: P1, right: P2) -> Self {
                $name(left, right, PhantomData)
            }
        }

        impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for $name<P1, P2, T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                self.0.check(value) $op self.1.check(value)
            }
        }

        impl<P1: Clone, P2: Clone, T: ?Sized> Clone for $name<P1, P2, T> {
            fn clone(&self) -> Self {
                $name(self.0.clone(), self.1.clone(), PhantomData)
            }
        }

        impl<P1: Copy, P2: Copy, T: ?Sized> Copy for $name<P1, P2, T> {}

        impl<P1: fmt::Debug, P2: fmt::Debug, T: ?Sized> fmt::Debug for $name<P1, P2, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).field(&self.1).finish()
            }
        }
    };
}

binary_combinator!(
    /// AND combinator - both predicates must be true.
    And, &&
);

binary_combinator!(
    /// OR combinator - either predicate must be true.
    Or, ||
);

/// NOT combinator - inverts the predicate.
pub struct Not<P, T: ?Sized>(pub P, PhantomData<fn(&T) -> bool>);

impl<P, T: ?Sized> Not<P, T> {
    /// Invert a predicate over `T`.
    pub fn new(inner: P) -> Self {
        Not(inner, PhantomData)
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P, T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

impl<P: Clone, T: ?Sized> Clone for Not<P, T> {
    fn clone(&self) -> Self {
        Not(self.0.clone(), PhantomData)
    }
}

impl<P: Copy, T: ?Sized> Copy for Not<P, T> {}

impl<P: fmt::Debug, T: ?Sized> fmt::Debug for Not<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Not").field(&self.0).finish()
    }
}

/// A predicate that always holds. Neutral element for `and`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Valid;

impl<T: ?Sized> Predicate<T> for Valid {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// A predicate that never holds. Neutral element for `or`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Invalid;

impl<T: ?Sized> Predicate<T> for Invalid {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        false
    }
}

/// A predicate that always holds; a safe seed for `and` chains.
///
/// ```rust
/// use plumbline::predicate::*;
///
/// let p = valid().and(|s: &str| !s.is_empty());
/// assert!(p.check("x"));
/// ```
pub fn valid() -> Valid {
    Valid
}

/// A predicate that never holds; a safe seed for `or` chains.
///
/// ```rust
/// use plumbline::predicate::*;
///
/// let p = invalid().or(|s: &str| s.is_empty());
/// assert!(p.check(""));
/// assert!(!p.check("x"));
/// ```
pub fn invalid() -> Invalid {
    Invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositionError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn positive(n: &i32) -> bool {
        *n > 0
    }

    fn even(n: &i32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn test_and() {
        let p = positive.and(|n: &i32| *n < 10);
        assert!(p.check(&5));
        assert!(!p.check(&0));
        assert!(!p.check(&10));
    }

    #[test]
    fn test_or() {
        let p = (|n: &i32| *n < 0).or(|n: &i32| *n > 100);
        assert!(p.check(&-5));
        assert!(p.check(&150));
        assert!(!p.check(&50));
    }

    #[test]
    fn test_not() {
        let p = positive.not();
        assert!(p.check(&-5));
        assert!(p.check(&0));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = AtomicUsize::new(0);
        let counted = |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let p = positive.or(counted);
        assert!(p.check(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(p.check(&-1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = AtomicUsize::new(0);
        let counted = |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let p = positive.and(counted);
        assert!(!p.check(&-1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_not_and_and_not() {
        let p = positive.or_not(even);
        assert!(p.check(&3));
        assert!(p.check(&-3));
        assert!(!p.check(&-4));

        let q = positive.and_not(even);
        assert!(q.check(&3));
        assert!(!q.check(&4));
    }

    #[test]
    fn test_identities() {
        for n in -3..3 {
            assert_eq!(Predicate::<i32>::check(&even.or(invalid()), &n), even(&n));
            assert_eq!(Predicate::<i32>::check(&even.and(valid()), &n), even(&n));
        }
    }

    #[test]
    fn test_relation_forms() {
        let divisible = |n: &i32, d: &i32| n % d == 0;
        let p = positive.or_relation(divisible, 5);
        assert!(p.check(&-10));
        assert!(!p.check(&-3));

        let q = positive.or_relation_any(divisible, 3, 7, []);
        assert!(q.check(&-21));
        assert!(q.check(&-14));
        assert!(!q.check(&-5));

        let r = positive.and_relation_all(divisible, 2, 3, vec![5]);
        assert!(r.check(&30));
        assert!(!r.check(&6));
    }

    #[test]
    fn test_quantified_forms_put_value_in_object_position() {
        // subject < object: "every subject is below the value"
        let below = |subject: &i32, object: &i32| subject < object;
        let p = invalid().or_all(vec![1, 2, 3], below).unwrap();
        assert!(p.check(&4));
        assert!(!p.check(&3));

        let q = invalid().or_any(vec![1, 10], below).unwrap();
        assert!(q.check(&5));
        assert!(!q.check(&1));

        let r = valid().and_none(vec![5, 6], below).unwrap();
        assert!(r.check(&5));
        assert!(!r.check(&6));
    }

    #[test]
    fn test_quantified_forms_reject_empty_subjects() {
        let below = |subject: &i32, object: &i32| subject < object;
        assert_eq!(
            positive.or_all(Vec::<i32>::new(), below).err(),
            Some(CompositionError::EmptyCollection { what: "subjects" })
        );
        assert!(positive.and_any(Vec::<i32>::new(), below).is_err());
    }

    #[test]
    fn test_that_forms_ignore_the_value() {
        let p = positive.or_that("config.toml", |path: &&str| path.ends_with(".toml"));
        assert!(p.check(&-1));

        let q = positive.and_that_relation(3, |a: &i32, b: &i32| a > b, 4);
        assert!(!q.check(&1));
    }

    #[test]
    fn test_composition_leaves_operands_usable() {
        let base = positive;
        let a = base.or(even);
        let b = base.and(even);
        assert!(a.check(&-2));
        assert!(!b.check(&-2));
        assert!(base(&1));
    }

    #[test]
    fn test_generic_checks_compose_with_method_syntax() {
        use crate::checks::{blank, empty, none, not_empty, some, starts_with};

        let p = none().or(some());
        assert!(p.check(&Some(1)));
        assert!(p.check(&None::<i32>));

        let q = not_empty().and_relation(starts_with(), "http");
        assert!(q.check("https://example.com"));
        assert!(!q.check("ftp://example.com"));

        let r = empty().not().and_not(blank());
        assert!(r.check(&String::from("x")));
        assert!(!r.check(&String::from("  ")));
        assert!(!r.check(&String::new()));
    }

    #[test]
    fn test_composed_identity_is_anonymous() {
        let p = positive.or(even);
        let id = Predicate::<i32>::identity(&p);
        assert!(!id.is_named());
        assert!(id.name().starts_with("Or<"));
    }
}
