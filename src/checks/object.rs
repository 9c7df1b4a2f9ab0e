//! Checks over arbitrary values

use super::support::{Container, Extent};
use super::Check;
use crate::message::prefab;
use crate::predicate::Predicate;
use crate::relation::{ObjIntRelation, Relation};

/// Test for `Option::is_none`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsNone;

impl<T> Predicate<Option<T>> for IsNone {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

/// Test for `Option::is_some`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsSome;

impl<T> Predicate<Option<T>> for IsSome {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

/// Test for a zero [`Extent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IsEmpty;

impl<T: Extent + ?Sized> Predicate<T> for IsEmpty {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.extent() == 0
    }
}

/// Test for a non-zero [`Extent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IsNotEmpty;

impl<T: Extent + ?Sized> Predicate<T> for IsNotEmpty {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.extent() != 0
    }
}

/// Test for text that is empty or whitespace only.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsBlank;

impl<T: AsRef<str> + ?Sized> Predicate<T> for IsBlank {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.as_ref().trim().is_empty()
    }
}

/// Holds for `None`.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(none().check(&None::<i32>));
/// assert!(!none().check(&Some(1)));
/// ```
pub const fn none() -> Check<IsNone> {
    Check::new("none()", prefab::none, IsNone)
}

/// Holds for `Some(_)`.
pub const fn some() -> Check<IsSome> {
    Check::new("some()", prefab::some, IsSome)
}

/// Holds for empty strings and collections.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(empty().check(""));
/// assert!(empty().check(&Vec::<u8>::new()));
/// assert!(!empty().check(&[1, 2]));
/// ```
pub const fn empty() -> Check<IsEmpty> {
    Check::new("empty()", prefab::empty, IsEmpty)
}

/// Holds for non-empty strings and collections.
pub const fn not_empty() -> Check<IsNotEmpty> {
    Check::new("not_empty()", prefab::not_empty, IsNotEmpty)
}

/// Holds for text that is empty or contains only whitespace.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(blank().check(" \t\n"));
/// assert!(!blank().check(" x "));
/// ```
pub const fn blank() -> Check<IsBlank> {
    Check::new("blank()", prefab::blank, IsBlank)
}

/// `subject == object`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equal;

impl<S: PartialEq<O> + ?Sized, O: ?Sized> Relation<S, O> for Equal {
    #[inline]
    fn relates(&self, subject: &S, object: &O) -> bool {
        subject == object
    }
}

/// `subject != object`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotEqual;

impl<S: PartialEq<O> + ?Sized, O: ?Sized> Relation<S, O> for NotEqual {
    #[inline]
    fn relates(&self, subject: &S, object: &O) -> bool {
        subject != object
    }
}

macro_rules! ordering {
    ($($(#[$doc:meta])* $name:ident => $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl<S: PartialOrd<O> + ?Sized, O: ?Sized> Relation<S, O> for $name {
                #[inline]
                fn relates(&self, subject: &S, object: &O) -> bool {
                    subject $op object
                }
            }
        )*
    };
}

ordering! {
    /// `subject > object`.
    Greater => >;
    /// `subject >= object`.
    GreaterOrEqual => >=;
    /// `subject < object`.
    Less => <;
    /// `subject <= object`.
    LessOrEqual => <=;
}

/// Equality.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(eq().relates(&String::from("a"), "a"));
/// assert!(ne().relates(&1, &2));
/// ```
pub const fn eq() -> Check<Equal> {
    Check::new("eq()", prefab::eq, Equal)
}

/// Inequality.
pub const fn ne() -> Check<NotEqual> {
    Check::new("ne()", prefab::ne, NotEqual)
}

/// Strictly greater than.
pub const fn gt() -> Check<Greater> {
    Check::new("gt()", prefab::gt, Greater)
}

/// Greater than or equal.
pub const fn gte() -> Check<GreaterOrEqual> {
    Check::new("gte()", prefab::gte, GreaterOrEqual)
}

/// Strictly less than.
pub const fn lt() -> Check<Less> {
    Check::new("lt()", prefab::lt, Less)
}

/// Less than or equal.
pub const fn lte() -> Check<LessOrEqual> {
    Check::new("lte()", prefab::lte, LessOrEqual)
}

/// The subject collection holds the object.
#[derive(Clone, Copy, Debug, Default)]
pub struct Contains;

impl<C: Container<E> + ?Sized, E: ?Sized> Relation<C, E> for Contains {
    #[inline]
    fn relates(&self, subject: &C, object: &E) -> bool {
        subject.holds(object)
    }
}

/// The subject is held by the object collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainedIn;

impl<E: ?Sized, C: Container<E> + ?Sized> Relation<E, C> for ContainedIn {
    #[inline]
    fn relates(&self, subject: &E, object: &C) -> bool {
        object.holds(subject)
    }
}

/// The subject collection holds the object.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(contains().relates(&vec![1, 2, 3], &2));
/// assert!(contained_in().relates(&2, &[1, 2, 3]));
/// ```
pub const fn contains() -> Check<Contains> {
    Check::new("contains()", prefab::contains, Contains)
}

/// The subject is an element of the object collection.
pub const fn contained_in() -> Check<ContainedIn> {
    Check::new("contained_in()", prefab::contained_in, ContainedIn)
}

macro_rules! textual {
    ($($(#[$doc:meta])* $name:ident => |$s:ident, $o:ident| $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl<S: AsRef<str> + ?Sized, O: AsRef<str> + ?Sized> Relation<S, O> for $name {
                #[inline]
                fn relates(&self, subject: &S, object: &O) -> bool {
                    let ($s, $o) = (subject.as_ref(), object.as_ref());
                    $body
                }
            }
        )*
    };
}

textual! {
    /// The subject text starts with the object text.
    StartsWith => |s, o| s.starts_with(o);
    /// The subject text ends with the object text.
    EndsWith => |s, o| s.ends_with(o);
    /// The subject text contains the object text.
    HasSubstr => |s, o| s.contains(o);
    /// The subject text occurs in the object text.
    SubstrOf => |s, o| o.contains(s);
    /// The texts are equal after Unicode lowercasing.
    EqualsIgnoreCase => |s, o| lowercased(s).eq(lowercased(o));
}

fn lowercased(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

/// The subject text starts with the object text.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(starts_with().relates("hello", "he"));
/// assert!(ends_with().relates(&String::from("hello"), "lo"));
/// assert!(equals_ignore_case().relates("HeLLo", "hello"));
/// ```
pub const fn starts_with() -> Check<StartsWith> {
    Check::new("starts_with()", prefab::starts_with, StartsWith)
}

/// The subject text ends with the object text.
pub const fn ends_with() -> Check<EndsWith> {
    Check::new("ends_with()", prefab::ends_with, EndsWith)
}

/// The subject text contains the object text.
pub const fn has_substr() -> Check<HasSubstr> {
    Check::new("has_substr()", prefab::has_substr, HasSubstr)
}

/// The subject text is a substring of the object text.
pub const fn substr_of() -> Check<SubstrOf> {
    Check::new("substr_of()", prefab::substr_of, SubstrOf)
}

/// The texts are equal ignoring case.
pub const fn equals_ignore_case() -> Check<EqualsIgnoreCase> {
    Check::new("equals_ignore_case()", prefab::equals_ignore_case, EqualsIgnoreCase)
}

fn compare_len(len: usize, bound: i32) -> std::cmp::Ordering {
    // usize::MAX would not fit i64 on 64-bit targets, any bound is below it
    match i64::try_from(len) {
        Ok(len) => len.cmp(&i64::from(bound)),
        Err(_) => std::cmp::Ordering::Greater,
    }
}

macro_rules! length {
    ($($(#[$doc:meta])* $name:ident => $($ord:ident)|+;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl<S: Extent + ?Sized> ObjIntRelation<S> for $name {
                #[inline]
                fn relates_obj_int(&self, subject: &S, object: i32) -> bool {
                    matches!(compare_len(subject.extent(), object), $(std::cmp::Ordering::$ord)|+)
                }
            }
        )*
    };
}

length! {
    /// Extent equal to the object.
    LenEq => Equal;
    /// Extent greater than the object.
    LenGt => Greater;
    /// Extent greater than or equal to the object.
    LenGte => Greater | Equal;
    /// Extent less than the object.
    LenLt => Less;
    /// Extent less than or equal to the object.
    LenLte => Less | Equal;
}

/// Length equal to an integer.
///
/// ```rust
/// use plumbline::predicate::prelude::*;
///
/// assert!(len_eq().relates_obj_int("abc", 3));
/// assert!(len_lt().relates_obj_int(&vec![1], 2));
/// assert!(len_gt().relates_obj_int("", -1));
/// ```
pub const fn len_eq() -> Check<LenEq> {
    Check::new("len_eq()", prefab::len_eq, LenEq)
}

/// Length greater than an integer.
pub const fn len_gt() -> Check<LenGt> {
    Check::new("len_gt()", prefab::len_gt, LenGt)
}

/// Length at least an integer.
pub const fn len_gte() -> Check<LenGte> {
    Check::new("len_gte()", prefab::len_gte, LenGte)
}

/// Length less than an integer.
pub const fn len_lt() -> Check<LenLt> {
    Check::new("len_lt()", prefab::len_lt, LenLt)
}

/// Length at most an integer.
pub const fn len_lte() -> Check<LenLte> {
    Check::new("len_lte()", prefab::len_lte, LenLte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;
    use std::collections::HashMap;

    #[test]
    fn test_option_checks() {
        assert!(some().check(&Some("x")));
        assert!(!some().check(&None::<&str>));
        assert!(none().or(some()).check(&Some(1)));
    }

    #[test]
    fn test_emptiness() {
        assert!(not_empty().check("a"));
        assert!(!not_empty().check(&HashMap::<u8, u8>::new()));
        assert!(empty().check(&String::new()));
        assert!(!blank().check(&String::from("\u{2003}x")));
        assert!(blank().check(&String::from("\u{2003}")));
    }

    #[test]
    fn test_ordering_across_types() {
        assert!(gt().relates(&2.5, &1.0));
        assert!(gte().relates("b", "a"));
        assert!(lt().relates(&'a', &'b'));
        assert!(!lte().relates(&3u64, &2u64));
        assert!(eq().relates(&String::from("x"), &String::from("x")));
    }

    #[test]
    fn test_membership() {
        assert!(contains().relates(&HashMap::from([("k", 1)]), &"k"));
        assert!(!contained_in().relates(&4, &vec![1, 2, 3]));
    }

    #[test]
    fn test_text_relations() {
        assert!(has_substr().relates("haystack", "st"));
        assert!(substr_of().relates("st", "haystack"));
        assert!(!substr_of().relates("haystack", "st"));
        assert!(equals_ignore_case().relates("STRASSE", "strasse"));
        assert!(!equals_ignore_case().relates("abc", "abd"));
    }

    #[test]
    fn test_lengths() {
        assert!(len_gte().relates_obj_int("abc", 3));
        assert!(!len_gt().relates_obj_int("abc", 3));
        assert!(len_lte().relates_obj_int(&[0u8; 2], 2));
        assert!(!len_eq().relates_obj_int("abc", -3));
    }

    #[test]
    fn test_relation_as_predicate() {
        let p = not_empty().and_relation(starts_with(), "http");
        assert!(p.check("https://example.com"));
        assert!(!p.check("ftp://example.com"));
        assert!(!p.check(""));
    }
}
