//! Integer-specialized predicates
//!
//! [`IntPredicate`] tests plain `i32` values without boxing or borrowing. It
//! has its own combinator set so that integer chains can take integer
//! relations such as "multiple of" directly.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::*;
//!
//! let small_even = (|n: i32| n % 2 == 0).and(|n: i32| n.abs() < 10);
//! assert!(small_even.check_int(4));
//! assert!(!small_even.check_int(12));
//! ```

use super::adapters::{That, ThatRelated};
use super::combinators::{inline, Predicate};
use crate::error::CompositionError;
use crate::message::Identity;
use crate::quantifier::{Candidates, Quantifier};
use crate::relation::{IntObjRelation, IntRelation, Relation};

/// A composable test over `i32` values.
pub trait IntPredicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check_int(&self, value: i32) -> bool;

    /// Name and default message of this predicate.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
}

impl<F> IntPredicate for F
where
    F: Fn(i32) -> bool + Send + Sync,
{
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self(value)
    }
}

/// Combinators for [`IntPredicate`].
///
/// Same contract as [`PredicateExt`](super::PredicateExt): operands are never
/// modified, evaluation is lazy and short-circuits, and results are anonymous.
pub trait IntPredicateExt: IntPredicate + Sized {
    /// Holds when `self` or `other` holds.
    fn or<P: IntPredicate>(self, other: P) -> IntOr<Self, P> {
        IntOr(self, other)
    }

    /// Holds when `self` holds or `other` does not.
    fn or_not<P: IntPredicate>(self, other: P) -> IntOr<Self, IntNot<P>> {
        IntOr(self, IntNot(other))
    }

    /// Holds when `self` holds or the value has `relation` to `object`.
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// let p = (|n: i32| n < 0).or_relation(|a: i32, b: i32| a % b == 0, 5);
    /// assert!(p.check_int(-3));
    /// assert!(p.check_int(10));
    /// assert!(!p.check_int(7));
    /// ```
    fn or_relation<R: IntRelation>(self, relation: R, object: i32) -> IntOr<Self, IntRelatedTo<R>> {
        IntOr(self, IntRelatedTo::new(relation, object))
    }

    /// Holds when `self` holds or the value has `relation` to a non-integer
    /// `object`.
    fn or_relation_obj<O, R>(self, relation: R, object: O) -> IntOr<Self, IntRelatedToObj<R, O>>
    where
        O: Send + Sync,
        R: IntObjRelation<O>,
    {
        IntOr(self, IntRelatedToObj::new(relation, object))
    }

    /// Holds when `self` holds or the value has `relation` to any of the
    /// given objects.
    fn or_relation_any<R, I>(
        self,
        relation: R,
        first: i32,
        second: i32,
        more: I,
    ) -> IntOr<Self, IntRelatedToAny<R>>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        IntOr(self, IntRelatedToAny::new(relation, inline(first, second, more)))
    }

    /// Holds when `self` holds or `relation` holds from every subject to the
    /// value. Fails if `subjects` is empty.
    fn or_all<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntOr<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntOr(self, IntQuantified::new(Quantifier::All, subjects, relation)?))
    }

    /// Holds when `self` holds or `relation` holds from at least one subject
    /// to the value. Fails if `subjects` is empty.
    fn or_any<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntOr<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntOr(self, IntQuantified::new(Quantifier::Any, subjects, relation)?))
    }

    /// Holds when `self` holds or `relation` holds from no subject to the
    /// value. Fails if `subjects` is empty.
    fn or_none<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntOr<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntOr(self, IntQuantified::new(Quantifier::None, subjects, relation)?))
    }

    /// Holds when `self` holds or `test` holds on an unrelated `value`.
    fn or_that<U, P>(self, value: U, test: P) -> IntOr<Self, That<P, U>>
    where
        U: Send + Sync,
        P: Predicate<U>,
    {
        IntOr(self, That::new(value, test))
    }

    /// Holds when `self` holds or `subject` has `relation` to `object`.
    fn or_that_relation<S, O, R>(
        self,
        subject: S,
        relation: R,
        object: O,
    ) -> IntOr<Self, ThatRelated<R, S, O>>
    where
        S: Send + Sync,
        O: Send + Sync,
        R: Relation<S, O>,
    {
        IntOr(self, ThatRelated::new(subject, relation, object))
    }

    /// Holds when both `self` and `other` hold.
    fn and<P: IntPredicate>(self, other: P) -> IntAnd<Self, P> {
        IntAnd(self, other)
    }

    /// Holds when `self` holds and `other` does not.
    fn and_not<P: IntPredicate>(self, other: P) -> IntAnd<Self, IntNot<P>> {
        IntAnd(self, IntNot(other))
    }

    /// Holds when `self` holds and the value has `relation` to `object`.
    fn and_relation<R: IntRelation>(
        self,
        relation: R,
        object: i32,
    ) -> IntAnd<Self, IntRelatedTo<R>> {
        IntAnd(self, IntRelatedTo::new(relation, object))
    }

    /// Holds when `self` holds and the value has `relation` to a non-integer
    /// `object`.
    fn and_relation_obj<O, R>(self, relation: R, object: O) -> IntAnd<Self, IntRelatedToObj<R, O>>
    where
        O: Send + Sync,
        R: IntObjRelation<O>,
    {
        IntAnd(self, IntRelatedToObj::new(relation, object))
    }

    /// Holds when `self` holds and the value has `relation` to every one of
    /// the given objects.
    fn and_relation_all<R, I>(
        self,
        relation: R,
        first: i32,
        second: i32,
        more: I,
    ) -> IntAnd<Self, IntRelatedToAll<R>>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        IntAnd(self, IntRelatedToAll::new(relation, inline(first, second, more)))
    }

    /// Holds when `self` holds and `relation` holds from every subject to the
    /// value. Fails if `subjects` is empty.
    fn and_all<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntAnd<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntAnd(self, IntQuantified::new(Quantifier::All, subjects, relation)?))
    }

    /// Holds when `self` holds and `relation` holds from at least one subject
    /// to the value. Fails if `subjects` is empty.
    fn and_any<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntAnd<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntAnd(self, IntQuantified::new(Quantifier::Any, subjects, relation)?))
    }

    /// Holds when `self` holds and `relation` holds from no subject to the
    /// value. Fails if `subjects` is empty.
    fn and_none<R, I>(
        self,
        subjects: I,
        relation: R,
    ) -> Result<IntAnd<Self, IntQuantified<R>>, CompositionError>
    where
        R: IntRelation,
        I: IntoIterator<Item = i32>,
    {
        Ok(IntAnd(self, IntQuantified::new(Quantifier::None, subjects, relation)?))
    }

    /// Holds when `self` holds and `test` holds on an unrelated `value`.
    fn and_that<U, P>(self, value: U, test: P) -> IntAnd<Self, That<P, U>>
    where
        U: Send + Sync,
        P: Predicate<U>,
    {
        IntAnd(self, That::new(value, test))
    }

    /// Holds when `self` holds and `subject` has `relation` to `object`.
    fn and_that_relation<S, O, R>(
        self,
        subject: S,
        relation: R,
        object: O,
    ) -> IntAnd<Self, ThatRelated<R, S, O>>
    where
        S: Send + Sync,
        O: Send + Sync,
        R: Relation<S, O>,
    {
        IntAnd(self, ThatRelated::new(subject, relation, object))
    }

    /// Invert the predicate.
    fn not(self) -> IntNot<Self> {
        IntNot(self)
    }
}

impl<P: IntPredicate> IntPredicateExt for P {}

/// Integer AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct IntAnd<P1, P2>(pub P1, pub P2);

impl<P1: IntPredicate, P2: IntPredicate> IntPredicate for IntAnd<P1, P2> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.0.check_int(value) && self.1.check_int(value)
    }
}

/// Integer OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct IntOr<P1, P2>(pub P1, pub P2);

impl<P1: IntPredicate, P2: IntPredicate> IntPredicate for IntOr<P1, P2> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.0.check_int(value) || self.1.check_int(value)
    }
}

/// Integer NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct IntNot<P>(pub P);

impl<P: IntPredicate> IntPredicate for IntNot<P> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        !self.0.check_int(value)
    }
}

/// An integer predicate that always holds.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidInt;

impl IntPredicate for ValidInt {
    #[inline]
    fn check_int(&self, _value: i32) -> bool {
        true
    }
}

/// An integer predicate that never holds.
#[derive(Clone, Copy, Default, Debug)]
pub struct InvalidInt;

impl IntPredicate for InvalidInt {
    #[inline]
    fn check_int(&self, _value: i32) -> bool {
        false
    }
}

/// Integer predicate that always holds; a safe seed for `and` chains.
pub fn valid_int() -> ValidInt {
    ValidInt
}

/// Integer predicate that never holds; a safe seed for `or` chains.
pub fn invalid_int() -> InvalidInt {
    InvalidInt
}

/// Holds when the value has an integer relation to a fixed integer.
#[derive(Clone, Copy, Debug)]
pub struct IntRelatedTo<R> {
    relation: R,
    object: i32,
}

impl<R> IntRelatedTo<R> {
    /// Relate every tested value to `object`.
    pub fn new(relation: R, object: i32) -> Self {
        IntRelatedTo { relation, object }
    }
}

impl<R: IntRelation> IntPredicate for IntRelatedTo<R> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.relation.relates_int(value, self.object)
    }
}

/// Holds when the value has a relation to a fixed non-integer object.
#[derive(Clone, Copy, Debug)]
pub struct IntRelatedToObj<R, O> {
    relation: R,
    object: O,
}

impl<R, O> IntRelatedToObj<R, O> {
    /// Relate every tested value to `object`.
    pub fn new(relation: R, object: O) -> Self {
        IntRelatedToObj { relation, object }
    }
}

impl<O: Send + Sync, R: IntObjRelation<O>> IntPredicate for IntRelatedToObj<R, O> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.relation.relates_int_obj(value, &self.object)
    }
}

/// Holds when the value has an integer relation to any of several integers.
#[derive(Clone, Debug)]
pub struct IntRelatedToAny<R> {
    relation: R,
    objects: Candidates<i32>,
}

impl<R> IntRelatedToAny<R> {
    /// Relate every tested value to `objects`, succeeding on the first match.
    pub fn new(relation: R, objects: Candidates<i32>) -> Self {
        IntRelatedToAny { relation, objects }
    }
}

impl<R: IntRelation> IntPredicate for IntRelatedToAny<R> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        Quantifier::Any.apply(&self.objects, |&object| self.relation.relates_int(value, object))
    }
}

/// Holds when the value has an integer relation to every one of several
/// integers.
#[derive(Clone, Debug)]
pub struct IntRelatedToAll<R> {
    relation: R,
    objects: Candidates<i32>,
}

impl<R> IntRelatedToAll<R> {
    /// Relate every tested value to all of `objects`.
    pub fn new(relation: R, objects: Candidates<i32>) -> Self {
        IntRelatedToAll { relation, objects }
    }
}

impl<R: IntRelation> IntPredicate for IntRelatedToAll<R> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        Quantifier::All.apply(&self.objects, |&object| self.relation.relates_int(value, object))
    }
}

/// Applies an integer relation from each of a set of subjects to the value.
///
/// The stored integers are the relation's subjects; the tested value is its
/// object.
#[derive(Clone, Debug)]
pub struct IntQuantified<R> {
    quantifier: Quantifier,
    subjects: Candidates<i32>,
    relation: R,
}

impl<R> IntQuantified<R> {
    /// Quantify `relation` over `subjects`. Fails if `subjects` is empty.
    pub fn new<I>(
        quantifier: Quantifier,
        subjects: I,
        relation: R,
    ) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = i32>,
    {
        Ok(IntQuantified {
            quantifier,
            subjects: Candidates::try_from_iter(subjects, "subjects")?,
            relation,
        })
    }
}

impl<R: IntRelation> IntPredicate for IntQuantified<R> {
    #[inline]
    fn check_int(&self, value: i32) -> bool {
        self.quantifier
            .apply(&self.subjects, |&subject| self.relation.relates_int(subject, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even(n: i32) -> bool {
        n % 2 == 0
    }

    fn divides(a: i32, b: i32) -> bool {
        b % a == 0
    }

    #[test]
    fn test_basic_combinators() {
        let p = even.or(|n: i32| n > 100);
        assert!(p.check_int(4));
        assert!(p.check_int(101));
        assert!(!p.check_int(7));

        let q = even.and_not(|n: i32| n > 100);
        assert!(q.check_int(4));
        assert!(!q.check_int(102));
        assert!(even.not().check_int(3));
    }

    #[test]
    fn test_identities() {
        for n in -5..5 {
            assert_eq!(even.or(invalid_int()).check_int(n), even(n));
            assert_eq!(even.and(valid_int()).check_int(n), even(n));
        }
    }

    #[test]
    fn test_relation_forms() {
        let gt = |a: i32, b: i32| a > b;
        let p = even.or_relation(gt, 100);
        assert!(!p.check_int(7));
        assert!(p.check_int(101));

        let q = invalid_int().or_relation_any(|a: i32, b: i32| a == b, 1, 2, [3]);
        assert!(q.check_int(3));
        assert!(!q.check_int(4));

        let r = valid_int().and_relation_all(|a: i32, b: i32| a % b == 0, 2, 3, []);
        assert!(r.check_int(12));
        assert!(!r.check_int(8));
    }

    #[test]
    fn test_obj_relation() {
        let index_in = |i: i32, v: &Vec<char>| i >= 0 && (i as usize) < v.len();
        let p = valid_int().and_relation_obj(index_in, vec!['a', 'b']);
        assert!(p.check_int(1));
        assert!(!p.check_int(2));
    }

    #[test]
    fn test_quantified() {
        let p = invalid_int().or_all([2, 3], divides).unwrap();
        assert!(p.check_int(12));
        assert!(!p.check_int(8));

        let q = valid_int().and_none([2, 3], divides).unwrap();
        assert!(q.check_int(7));
        assert!(!q.check_int(9));

        assert!(invalid_int().or_any(Vec::new(), divides).is_err());
    }

    #[test]
    fn test_that_forms() {
        let p = even.or_that("x", |s: &&str| *s == "x");
        assert!(p.check_int(1));
        let q = even.and_that_relation(1, |a: &i32, b: &i32| a > b, 2);
        assert!(!q.check_int(2));
    }
}
