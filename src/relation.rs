//! Binary tests between a subject and an object
//!
//! A relation answers "does `subject` stand in this relation to `object`?".
//! There is one generic form and three integer-specialized forms, so checks
//! such as "multiple of" or "index within bounds of" can take plain `i32`s.
//!
//! | trait | subject | object |
//! |---|---|---|
//! | [`Relation<S, O>`] | `&S` | `&O` |
//! | [`IntRelation`] | `i32` | `i32` |
//! | [`IntObjRelation<O>`] | `i32` | `&O` |
//! | [`ObjIntRelation<S>`] | `&S` | `i32` |
//!
//! Closures with the matching signature implement these traits. Every relation
//! can be turned around with [`Converse`] and inverted with [`Negated`]; both
//! return a new value and leave the original untouched.
//!
//! # Example
//!
//! ```rust
//! use plumbline::relation::*;
//!
//! let shorter_than = |s: &String, max: &usize| s.len() < *max;
//! assert!(shorter_than.relates(&"abc".to_string(), &5));
//!
//! let longer_or_equal = shorter_than.negate();
//! assert!(longer_or_equal.relates(&"abcdef".to_string(), &5));
//!
//! let divides = (|a: i32, b: i32| b % a == 0).converse();
//! assert!(divides.relates_int(12, 3));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::message::Identity;

/// A binary test relating a subject of type `S` to an object of type `O`.
pub trait Relation<S: ?Sized, O: ?Sized>: Send + Sync {
    /// Whether `subject` has this relation to `object`.
    fn relates(&self, subject: &S, object: &O) -> bool;

    /// Name and default message of this relation.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
}

impl<S: ?Sized, O: ?Sized, F> Relation<S, O> for F
where
    F: Fn(&S, &O) -> bool + Send + Sync,
{
    #[inline]
    fn relates(&self, subject: &S, object: &O) -> bool {
        self(subject, object)
    }
}

/// A binary test between two integers.
pub trait IntRelation: Send + Sync {
    /// Whether `subject` has this relation to `object`.
    fn relates_int(&self, subject: i32, object: i32) -> bool;

    /// Name and default message of this relation.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
}

impl<F> IntRelation for F
where
    F: Fn(i32, i32) -> bool + Send + Sync,
{
    #[inline]
    fn relates_int(&self, subject: i32, object: i32) -> bool {
        self(subject, object)
    }
}

/// A binary test with an integer subject and an object of type `O`.
pub trait IntObjRelation<O: ?Sized>: Send + Sync {
    /// Whether `subject` has this relation to `object`.
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool;

    /// Name and default message of this relation.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
}

impl<O: ?Sized, F> IntObjRelation<O> for F
where
    F: Fn(i32, &O) -> bool + Send + Sync,
{
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool {
        self(subject, object)
    }
}

/// A binary test with a subject of type `S` and an integer object.
pub trait ObjIntRelation<S: ?Sized>: Send + Sync {
    /// Whether `subject` has this relation to `object`.
    fn relates_obj_int(&self, subject: &S, object: i32) -> bool;

    /// Name and default message of this relation.
    fn identity(&self) -> Identity {
        Identity::anonymous::<Self>()
    }
}

impl<S: ?Sized, F> ObjIntRelation<S> for F
where
    F: Fn(&S, i32) -> bool + Send + Sync,
{
    #[inline]
    fn relates_obj_int(&self, subject: &S, object: i32) -> bool {
        self(subject, object)
    }
}

// Converse and Negated carry the wrapped relation's subject and object types
// so that generic checks such as `eq()` can be turned around before the types
// are known.
macro_rules! relation_wrapper {
    ($name:ident) => {
        impl<R: Clone, S: ?Sized, O: ?Sized> Clone for $name<R, S, O> {
            fn clone(&self) -> Self {
                $name(self.0.clone(), PhantomData)
            }
        }

        impl<R: Copy, S: ?Sized, O: ?Sized> Copy for $name<R, S, O> {}

        impl<R: fmt::Debug, S: ?Sized, O: ?Sized> fmt::Debug for $name<R, S, O> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
}

/// A relation with subject and object swapped.
///
/// `S` and `O` are the subject and object types of the wrapped relation. The
/// converse of an [`IntObjRelation<O>`] is an [`ObjIntRelation<O>`] and the
/// other way round.
pub struct Converse<R, S: ?Sized, O: ?Sized>(pub R, PhantomData<fn(&S, &O) -> bool>);

impl<R, S: ?Sized, O: ?Sized> Converse<R, S, O> {
    /// Swap the roles of subject and object in `relation`.
    pub fn of(relation: R) -> Self {
        Converse(relation, PhantomData)
    }
}

relation_wrapper!(Converse);

impl<S: ?Sized, O: ?Sized, R: Relation<S, O>> Relation<O, S> for Converse<R, S, O> {
    #[inline]
    fn relates(&self, subject: &O, object: &S) -> bool {
        self.0.relates(object, subject)
    }
}

impl<R: IntRelation> IntRelation for Converse<R, i32, i32> {
    #[inline]
    fn relates_int(&self, subject: i32, object: i32) -> bool {
        self.0.relates_int(object, subject)
    }
}

impl<O: ?Sized, R: IntObjRelation<O>> ObjIntRelation<O> for Converse<R, i32, O> {
    #[inline]
    fn relates_obj_int(&self, subject: &O, object: i32) -> bool {
        self.0.relates_int_obj(object, subject)
    }
}

impl<S: ?Sized, R: ObjIntRelation<S>> IntObjRelation<S> for Converse<R, S, i32> {
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &S) -> bool {
        self.0.relates_obj_int(object, subject)
    }
}

/// A relation that holds exactly when the wrapped one does not.
///
/// `S` and `O` are the subject and object types of the wrapped relation.
pub struct Negated<R, S: ?Sized, O: ?Sized>(pub R, PhantomData<fn(&S, &O) -> bool>);

impl<R, S: ?Sized, O: ?Sized> Negated<R, S, O> {
    /// Invert `relation`.
    pub fn of(relation: R) -> Self {
        Negated(relation, PhantomData)
    }
}

relation_wrapper!(Negated);

impl<S: ?Sized, O: ?Sized, R: Relation<S, O>> Relation<S, O> for Negated<R, S, O> {
    #[inline]
    fn relates(&self, subject: &S, object: &O) -> bool {
        !self.0.relates(subject, object)
    }
}

impl<R: IntRelation> IntRelation for Negated<R, i32, i32> {
    #[inline]
    fn relates_int(&self, subject: i32, object: i32) -> bool {
        !self.0.relates_int(subject, object)
    }
}

impl<O: ?Sized, R: IntObjRelation<O>> IntObjRelation<O> for Negated<R, i32, O> {
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool {
        !self.0.relates_int_obj(subject, object)
    }
}

impl<S: ?Sized, R: ObjIntRelation<S>> ObjIntRelation<S> for Negated<R, S, i32> {
    #[inline]
    fn relates_obj_int(&self, subject: &S, object: i32) -> bool {
        !self.0.relates_obj_int(subject, object)
    }
}

/// Converse and negation for generic relations.
pub trait RelationExt<S: ?Sized, O: ?Sized>: Relation<S, O> + Sized {
    /// Swap subject and object.
    ///
    /// ```rust
    /// use plumbline::relation::*;
    ///
    /// let contains = |s: &str, part: &str| s.contains(part);
    /// let within = contains.converse();
    /// assert!(within.relates("ell", "hello"));
    /// ```
    fn converse(self) -> Converse<Self, S, O> {
        Converse::of(self)
    }

    /// Invert the relation.
    fn negate(self) -> Negated<Self, S, O> {
        Negated::of(self)
    }
}

impl<S: ?Sized, O: ?Sized, R: Relation<S, O>> RelationExt<S, O> for R {}

/// Converse and negation for integer relations.
pub trait IntRelationExt: IntRelation + Sized {
    /// Swap subject and object.
    fn converse(self) -> Converse<Self, i32, i32> {
        Converse::of(self)
    }

    /// Invert the relation.
    fn negate(self) -> Negated<Self, i32, i32> {
        Negated::of(self)
    }
}

impl<R: IntRelation> IntRelationExt for R {}
