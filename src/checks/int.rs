//! Checks over `i32`

use super::support::Indexable;
use super::Check;
use crate::message::prefab;
use crate::predicate::IntPredicate;
use crate::relation::{IntObjRelation, IntRelation};

macro_rules! property {
    ($($(#[$doc:meta])* $name:ident => |$n:ident| $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl IntPredicate for $name {
                #[inline]
                fn check_int(&self, $n: i32) -> bool {
                    $body
                }
            }
        )*
    };
}

property! {
    /// Divisible by two.
    IsEven => |n| n % 2 == 0;
    /// Not divisible by two.
    IsOdd => |n| n % 2 != 0;
    /// Greater than zero.
    IsPositive => |n| n > 0;
    /// Less than zero.
    IsNegative => |n| n < 0;
    /// Equal to zero.
    IsZero => |n| n == 0;
}

/// Holds for even integers.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(even().check_int(-4));
/// assert!(!even().check_int(7));
/// assert!(odd().check_int(-7));
/// ```
pub const fn even() -> Check<IsEven> {
    Check::new("even()", prefab::even, IsEven)
}

/// Holds for odd integers.
pub const fn odd() -> Check<IsOdd> {
    Check::new("odd()", prefab::odd, IsOdd)
}

/// Holds for integers above zero.
pub const fn positive() -> Check<IsPositive> {
    Check::new("positive()", prefab::positive, IsPositive)
}

/// Holds for integers below zero.
pub const fn negative() -> Check<IsNegative> {
    Check::new("negative()", prefab::negative, IsNegative)
}

/// Holds for zero.
pub const fn zero() -> Check<IsZero> {
    Check::new("zero()", prefab::zero, IsZero)
}

macro_rules! comparison {
    ($($(#[$doc:meta])* $name:ident => $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl IntRelation for $name {
                #[inline]
                fn relates_int(&self, subject: i32, object: i32) -> bool {
                    subject $op object
                }
            }
        )*
    };
}

comparison! {
    /// `subject == object`.
    EqInt => ==;
    /// `subject != object`.
    NeInt => !=;
    /// `subject > object`.
    GtInt => >;
    /// `subject >= object`.
    GteInt => >=;
    /// `subject < object`.
    LtInt => <;
    /// `subject <= object`.
    LteInt => <=;
}

/// Integer equality.
pub const fn eq_int() -> Check<EqInt> {
    Check::new("eq_int()", prefab::eq, EqInt)
}

/// Integer inequality.
pub const fn ne_int() -> Check<NeInt> {
    Check::new("ne_int()", prefab::ne, NeInt)
}

/// Integer strictly greater than.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(gt_int().relates_int(5, 3));
/// assert!(gt_int().converse().relates_int(3, 5));
/// ```
pub const fn gt_int() -> Check<GtInt> {
    Check::new("gt_int()", prefab::gt, GtInt)
}

/// Integer greater than or equal.
pub const fn gte_int() -> Check<GteInt> {
    Check::new("gte_int()", prefab::gte, GteInt)
}

/// Integer strictly less than.
pub const fn lt_int() -> Check<LtInt> {
    Check::new("lt_int()", prefab::lt, LtInt)
}

/// Integer less than or equal.
pub const fn lte_int() -> Check<LteInt> {
    Check::new("lte_int()", prefab::lte, LteInt)
}

/// The subject is an integer multiple of the object.
#[derive(Clone, Copy, Debug, Default)]
pub struct MultipleOf;

impl IntRelation for MultipleOf {
    #[inline]
    fn relates_int(&self, subject: i32, object: i32) -> bool {
        match subject.checked_rem(object) {
            Some(rem) => rem == 0,
            // zero divisor, or i32::MIN / -1
            None => object == -1 || subject == 0,
        }
    }
}

/// The subject is a multiple of the object. Only zero is a multiple of zero.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(multiple_of().relates_int(12, 4));
/// assert!(!multiple_of().relates_int(12, 5));
/// assert!(multiple_of().relates_int(0, 0));
/// assert!(!multiple_of().relates_int(3, 0));
/// ```
pub const fn multiple_of() -> Check<MultipleOf> {
    Check::new("multiple_of()", prefab::multiple_of, MultipleOf)
}

fn position(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}

/// `0 <= subject < object.index_len()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexOf;

impl<O: Indexable + ?Sized> IntObjRelation<O> for IndexOf {
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool {
        position(subject).is_some_and(|i| i < object.index_len())
    }
}

/// `0 <= subject <= object.index_len()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToIndexOf;

impl<O: Indexable + ?Sized> IntObjRelation<O> for ToIndexOf {
    #[inline]
    fn relates_int_obj(&self, subject: i32, object: &O) -> bool {
        position(subject).is_some_and(|i| i <= object.index_len())
    }
}

/// The subject is a valid index into the object.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// let items = vec!['a', 'b', 'c'];
/// assert!(index_of().relates_int_obj(2, &items));
/// assert!(!index_of().relates_int_obj(3, &items));
/// assert!(to_index_of().relates_int_obj(3, &items));
/// assert!(!to_index_of().relates_int_obj(-1, &items));
/// ```
pub const fn index_of() -> Check<IndexOf> {
    Check::new("index_of()", prefab::index_of, IndexOf)
}

/// The subject is a valid exclusive end bound for the object.
pub const fn to_index_of() -> Check<ToIndexOf> {
    Check::new("to_index_of()", prefab::to_index_of, ToIndexOf)
}
