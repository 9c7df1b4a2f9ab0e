//! Predicates built from relations and from unrelated values
//!
//! These are the right-hand operands produced by the relation, quantifier and
//! "that" forms of [`PredicateExt`](super::PredicateExt). They are ordinary
//! predicates and can be used on their own.

use std::marker::PhantomData;

use super::combinators::Predicate;
use super::int::IntPredicate;
use crate::quantifier::{Candidates, Quantifier};
use crate::relation::{ObjIntRelation, Relation};

/// Holds when the value has a relation to a fixed object.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::*;
///
/// let p = RelatedTo::new(|s: &str, part: &&str| s.contains(*part), "ell");
/// assert!(p.check("hello"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RelatedTo<R, O> {
    relation: R,
    object: O,
}

impl<R, O> RelatedTo<R, O> {
    /// Relate every tested value to `object`.
    pub fn new(relation: R, object: O) -> Self {
        RelatedTo { relation, object }
    }

    /// The fixed object.
    pub fn object(&self) -> &O {
        &self.object
    }
}

impl<T: ?Sized, O: Send + Sync, R: Relation<T, O>> Predicate<T> for RelatedTo<R, O> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.relation.relates(value, &self.object)
    }
}

/// Holds when the value has an integer-object relation to a fixed integer.
#[derive(Clone, Copy, Debug)]
pub struct RelatedToInt<R> {
    relation: R,
    object: i32,
}

impl<R> RelatedToInt<R> {
    /// Relate every tested value to `object`.
    pub fn new(relation: R, object: i32) -> Self {
        RelatedToInt { relation, object }
    }
}

impl<T: ?Sized, R: ObjIntRelation<T>> Predicate<T> for RelatedToInt<R> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.relation.relates_obj_int(value, self.object)
    }
}

/// Holds when the value has a relation to at least one of several objects.
#[derive(Clone, Debug)]
pub struct RelatedToAny<R, O> {
    relation: R,
    objects: Candidates<O>,
}

impl<R, O> RelatedToAny<R, O> {
    /// Relate every tested value to `objects`, succeeding on the first match.
    pub fn new(relation: R, objects: Candidates<O>) -> Self {
        RelatedToAny { relation, objects }
    }

    /// The candidate objects.
    pub fn objects(&self) -> &Candidates<O> {
        &self.objects
    }
}

impl<T: ?Sized, O: Send + Sync, R: Relation<T, O>> Predicate<T> for RelatedToAny<R, O> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        Quantifier::Any.apply(&self.objects, |object| self.relation.relates(value, object))
    }
}

/// Holds when the value has a relation to every one of several objects.
#[derive(Clone, Debug)]
pub struct RelatedToAll<R, O> {
    relation: R,
    objects: Candidates<O>,
}

impl<R, O> RelatedToAll<R, O> {
    /// Relate every tested value to all of `objects`, failing on the first miss.
    pub fn new(relation: R, objects: Candidates<O>) -> Self {
        RelatedToAll { relation, objects }
    }

    /// The candidate objects.
    pub fn objects(&self) -> &Candidates<O> {
        &self.objects
    }
}

impl<T: ?Sized, O: Send + Sync, R: Relation<T, O>> Predicate<T> for RelatedToAll<R, O> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        Quantifier::All.apply(&self.objects, |object| self.relation.relates(value, object))
    }
}

/// Applies a relation from each of a set of subjects to the tested value.
///
/// Note the direction: the stored elements are the relation's *subjects* and
/// the value under test is its *object*.
///
/// ```rust
/// use plumbline::predicate::*;
/// use plumbline::quantifier::Quantifier;
///
/// // "every one of 2, 3 is a divisor of the value"
/// let divides = |d: &i32, n: &i32| n % d == 0;
/// let p = Quantified::new(Quantifier::All, vec![2, 3], divides).unwrap();
/// assert!(p.check(&12));
/// assert!(!p.check(&9));
/// ```
#[derive(Clone, Debug)]
pub struct Quantified<R, S> {
    quantifier: Quantifier,
    subjects: Candidates<S>,
    relation: R,
}

impl<R, S> Quantified<R, S> {
    /// Quantify `relation` over `subjects`. Fails if `subjects` is empty.
    pub fn new<I>(
        quantifier: Quantifier,
        subjects: I,
        relation: R,
    ) -> Result<Self, crate::error::CompositionError>
    where
        I: IntoIterator<Item = S>,
    {
        Ok(Quantified {
            quantifier,
            subjects: Candidates::try_from_iter(subjects, "subjects")?,
            relation,
        })
    }

    /// The quantifier applied.
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// The relation subjects.
    pub fn subjects(&self) -> &Candidates<S> {
        &self.subjects
    }
}

impl<T: ?Sized, S: Send + Sync, R: Relation<S, T>> Predicate<T> for Quantified<R, S> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.quantifier
            .apply(&self.subjects, |subject| self.relation.relates(subject, value))
    }
}

/// A test on a value captured at composition time.
///
/// Ignores whatever it is checked against, so it can join any chain, object or
/// integer.
pub struct That<P, U> {
    value: U,
    test: P,
}

impl<P, U> That<P, U> {
    /// Apply `test` to `value` whenever this predicate is checked.
    pub fn new(value: U, test: P) -> Self {
        That { value, test }
    }

    fn holds(&self) -> bool
    where
        P: Predicate<U>,
    {
        self.test.check(&self.value)
    }
}

impl<P: Clone, U: Clone> Clone for That<P, U> {
    fn clone(&self) -> Self {
        That::new(self.value.clone(), self.test.clone())
    }
}

impl<P, U: std::fmt::Debug> std::fmt::Debug for That<P, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("That")
            .field("value", &self.value)
            .field("test", &std::any::type_name::<P>())
            .finish()
    }
}

impl<T: ?Sized, U: Send + Sync, P: Predicate<U>> Predicate<T> for That<P, U> {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        self.holds()
    }
}

impl<U: Send + Sync, P: Predicate<U>> IntPredicate for That<P, U> {
    #[inline]
    fn check_int(&self, _value: i32) -> bool {
        self.holds()
    }
}

/// A relation between two values captured at composition time.
pub struct ThatRelated<R, S, O> {
    subject: S,
    relation: R,
    object: O,
    _marker: PhantomData<fn(&S, &O)>,
}

impl<R, S, O> ThatRelated<R, S, O> {
    /// Evaluate `relation` between `subject` and `object` whenever this
    /// predicate is checked.
    pub fn new(subject: S, relation: R, object: O) -> Self {
        ThatRelated {
            subject,
            relation,
            object,
            _marker: PhantomData,
        }
    }

    fn holds(&self) -> bool
    where
        R: Relation<S, O>,
    {
        self.relation.relates(&self.subject, &self.object)
    }
}

impl<R: Clone, S: Clone, O: Clone> Clone for ThatRelated<R, S, O> {
    fn clone(&self) -> Self {
        ThatRelated::new(self.subject.clone(), self.relation.clone(), self.object.clone())
    }
}

impl<R, S: std::fmt::Debug, O: std::fmt::Debug> std::fmt::Debug for ThatRelated<R, S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThatRelated")
            .field("subject", &self.subject)
            .field("relation", &std::any::type_name::<R>())
            .field("object", &self.object)
            .finish()
    }
}

impl<T, R, S, O> Predicate<T> for ThatRelated<R, S, O>
where
    T: ?Sized,
    S: Send + Sync,
    O: Send + Sync,
    R: Relation<S, O>,
{
    #[inline]
    fn check(&self, _value: &T) -> bool {
        self.holds()
    }
}

impl<R, S, O> IntPredicate for ThatRelated<R, S, O>
where
    S: Send + Sync,
    O: Send + Sync,
    R: Relation<S, O>,
{
    #[inline]
    fn check_int(&self, _value: i32) -> bool {
        self.holds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositionError;

    #[test]
    fn test_related_to() {
        let p = RelatedTo::new(|a: &i32, b: &i32| a > b, 10);
        assert!(p.check(&11));
        assert!(!p.check(&10));
        assert_eq!(*p.object(), 10);
    }

    #[test]
    fn test_related_to_int() {
        let p = RelatedToInt::new(|s: &str, n: i32| s.len() as i32 <= n, 3);
        assert!(p.check("abc"));
        assert!(!p.check("abcd"));
    }

    #[test]
    fn test_any_and_all_objects() {
        let starts = |s: &str, prefix: &&str| s.starts_with(*prefix);
        let any = RelatedToAny::new(starts, Candidates::new("a", vec!["b"]));
        assert!(any.check("apple"));
        assert!(any.check("banana"));
        assert!(!any.check("cherry"));

        let contains = |s: &str, part: &&str| s.contains(*part);
        let all = RelatedToAll::new(contains, Candidates::new("a", vec!["n"]));
        assert!(all.check("banana"));
        assert!(!all.check("apple"));
    }

    #[test]
    fn test_quantified_stops_at_first_decisive_subject() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let below = |s: &i32, v: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            s < v
        };
        let p = Quantified::new(Quantifier::Any, vec![1, 2, 3], below).unwrap();
        assert!(p.check(&5));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quantified_rejects_empty_subjects() {
        let below = |s: &i32, v: &i32| s < v;
        let err = Quantified::new(Quantifier::None, Vec::<i32>::new(), below).err();
        assert_eq!(err, Some(CompositionError::EmptyCollection { what: "subjects" }));
    }

    #[test]
    fn test_that_ignores_tested_value() {
        let p = That::new(String::from("ok"), |s: &String| s == "ok");
        assert!(Predicate::<i32>::check(&p, &1));
        assert!(Predicate::<str>::check(&p, "anything"));
        assert!(p.check_int(-1));
    }

    #[test]
    fn test_that_related() {
        let p = ThatRelated::new(3, |a: &i32, b: &i32| a < b, 4);
        assert!(Predicate::<()>::check(&p, &()));
        assert!(p.check_int(0));
        let q = ThatRelated::new(5, |a: &i32, b: &i32| a < b, 4);
        assert!(!q.check_int(0));
    }
}
