//! Quantified evaluation of relations
//!
//! A [`Quantifier`] decides whether a relation must hold against every, some,
//! or none of a set of candidate objects. The candidate set must not be empty:
//! "all of nothing" has no sensible answer for a precondition, so an empty set
//! is reported as a [`CompositionError`] instead of being vacuously true.
//!
//! # Example
//!
//! ```rust
//! use plumbline::quantifier::Quantifier;
//!
//! let divides = |n: i32, d: i32| n % d == 0;
//! assert_eq!(Quantifier::All.evaluate_int(12, &divides, &[2, 3, 4]), Ok(true));
//! assert_eq!(Quantifier::None.evaluate_int(7, &divides, &[2, 3]), Ok(true));
//! assert!(Quantifier::Any.evaluate_int(7, &divides, &[]).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CompositionError;
use crate::relation::{IntRelation, Relation};

/// How a relation is applied across a collection of candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// The relation must hold for every candidate.
    All,
    /// The relation must hold for at least one candidate.
    Any,
    /// The relation must hold for no candidate.
    None,
}

impl Quantifier {
    /// All quantifiers, in declaration order.
    pub const VALUES: [Quantifier; 3] = [Quantifier::All, Quantifier::Any, Quantifier::None];

    /// Upper-case name, as used in serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Quantifier::All => "ALL",
            Quantifier::Any => "ANY",
            Quantifier::None => "NONE",
        }
    }

    /// The phrase used in messages ("all of", "any of", "none of").
    pub fn phrase(self) -> &'static str {
        match self {
            Quantifier::All => "all of",
            Quantifier::Any => "any of",
            Quantifier::None => "none of",
        }
    }

    /// Apply `holds` to the items under this quantifier.
    ///
    /// Short-circuits like `Iterator::all` / `Iterator::any`. Callers are
    /// responsible for rejecting empty inputs.
    pub(crate) fn apply<I, F>(self, items: I, holds: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> bool,
    {
        let mut items = items.into_iter();
        match self {
            Quantifier::All => items.all(holds),
            Quantifier::Any => items.any(holds),
            Quantifier::None => !items.any(holds),
        }
    }

    /// Evaluate `relation` between `subject` and each of `objects`.
    pub fn evaluate<S, O, R>(
        self,
        subject: &S,
        relation: &R,
        objects: &[O],
    ) -> Result<bool, CompositionError>
    where
        S: ?Sized,
        R: Relation<S, O> + ?Sized,
    {
        if objects.is_empty() {
            return Err(CompositionError::EmptyCollection { what: "candidates" });
        }
        Ok(self.apply(objects, |object| relation.relates(subject, object)))
    }

    /// Evaluate an integer `relation` between `subject` and each of `objects`.
    pub fn evaluate_int<R>(
        self,
        subject: i32,
        relation: &R,
        objects: &[i32],
    ) -> Result<bool, CompositionError>
    where
        R: IntRelation + ?Sized,
    {
        if objects.is_empty() {
            return Err(CompositionError::EmptyCollection { what: "candidates" });
        }
        Ok(self.apply(objects, |&object| relation.relates_int(subject, object)))
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown quantifier name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quantifier: {0:?} (expected ALL, ANY or NONE)")]
pub struct ParseQuantifierError(String);

impl FromStr for Quantifier {
    type Err = ParseQuantifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantifier::VALUES
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseQuantifierError(s.to_string()))
    }
}

/// A candidate list guaranteed to hold at least one element.
///
/// Built once at composition time so quantified tests never have to deal with
/// an empty list during evaluation.
///
/// ```rust
/// use plumbline::quantifier::Candidates;
///
/// let c = Candidates::new(1, vec![2, 3]);
/// assert_eq!(c.len(), 3);
/// assert!(Candidates::<i32>::try_from_iter(vec![], "subjects").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> Candidates<T> {
    /// Create a candidate list from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Candidates { head, tail }
    }

    /// Collect `items`, failing if there are none.
    ///
    /// `what` names the collection in the error message.
    pub fn try_from_iter<I>(items: I, what: &'static str) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        match items.next() {
            Some(head) => Ok(Candidates::new(head, items.collect())),
            None => Err(CompositionError::EmptyCollection { what }),
        }
    }

    /// The first candidate.
    pub fn first(&self) -> &T {
        &self.head
    }

    /// Number of candidates (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterate over the candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<'a, T> IntoIterator for &'a Candidates<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Quantifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Quantifier::All),
            Just(Quantifier::Any),
            Just(Quantifier::None),
        ]
        .boxed()
    }
}
