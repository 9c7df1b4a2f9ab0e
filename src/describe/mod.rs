//! Runtime description of values
//!
//! Failure messages need to talk about values of any type: print them in a
//! bounded way, name their type, and sometimes branch on what kind of value
//! they are (a string, an array, a map...). The [`Describe`] trait provides that
//! through a [`View`], a borrowed, type-erased look at the value's shape.
//!
//! # Example
//!
//! ```rust
//! use plumbline::describe::{Describe, View};
//!
//! let values = vec![1, 2, 3];
//! match values.view() {
//!     View::Sequence { len, .. } => assert_eq!(len, 3),
//!     _ => unreachable!(),
//! }
//! assert_eq!(values.type_name(), "Vec<i32>");
//! assert_eq!([[0u8; 2]; 3].type_name(), "u8[3][]");
//! ```

mod summary;

pub use summary::Summarizer;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Whether a sequence is a fixed array/slice or a growable collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    /// `[T; N]` and `[T]`.
    Array,
    /// `Vec`, `VecDeque`, sets and other collections.
    Collection,
    /// An array or slice whose elements are arrays.
    NestedArray,
}

/// A borrowed, type-erased view of a value's shape.
pub enum View<'a> {
    /// An absent value (`None`, `()`).
    Null,
    /// Text, rendered without quotes.
    Text(&'a str),
    /// A value rendered through `Display` (numbers, booleans, chars).
    Scalar(&'a dyn fmt::Display),
    /// A value rendered through `Debug`, for types without a better view.
    Debug(&'a dyn fmt::Debug),
    /// An ordered run of elements.
    Sequence {
        /// Array or collection.
        kind: SequenceKind,
        /// Total number of elements.
        len: usize,
        /// The elements, in iteration order.
        items: Box<dyn Iterator<Item = &'a dyn Describe> + 'a>,
    },
    /// Key/value pairs.
    Map {
        /// Total number of entries.
        len: usize,
        /// The entries, in iteration order.
        entries: Box<dyn Iterator<Item = (&'a dyn Describe, &'a dyn Describe)> + 'a>,
    },
    /// A single key/value pair.
    Entry(&'a dyn Describe, &'a dyn Describe),
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Null => f.write_str("Null"),
            View::Text(s) => f.debug_tuple("Text").field(s).finish(),
            View::Scalar(v) => write!(f, "Scalar({v})"),
            View::Debug(v) => write!(f, "Debug({v:?})"),
            View::Sequence { kind, len, .. } => f
                .debug_struct("Sequence")
                .field("kind", kind)
                .field("len", len)
                .finish_non_exhaustive(),
            View::Map { len, .. } => f
                .debug_struct("Map")
                .field("len", len)
                .finish_non_exhaustive(),
            View::Entry(..) => f.write_str("Entry(..)"),
        }
    }
}

/// Values that can be described in failure messages.
///
/// Implemented for primitives, strings, `Option`, smart pointers, tuples of
/// two (as entries), arrays, slices and the standard collections. Implement it
/// for your own types by returning `View::Scalar(self)` (needs `Display`) or
/// `View::Debug(self)`.
///
/// ```rust
/// use plumbline::describe::{Describe, View};
///
/// #[derive(Debug)]
/// struct Port(u16);
///
/// impl Describe for Port {
///     fn view(&self) -> View<'_> {
///         View::Debug(self)
///     }
/// }
///
/// assert_eq!(Port(80).type_name(), "Port");
/// ```
pub trait Describe {
    /// The shape of this value.
    fn view(&self) -> View<'_>;

    /// The name of this value's type, without module paths.
    ///
    /// Arrays are named after their base element type with the outer length
    /// filled in, e.g. `i32[3][]` for `[[i32; 2]; 3]`.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(simple_type_name::<Self>())
    }

    /// Base element type and dimension count, for array naming.
    #[doc(hidden)]
    fn array_base() -> (String, usize)
    where
        Self: Sized,
    {
        (simple_type_name::<Self>(), 0)
    }
}

/// `std::any::type_name` with every module path stripped.
///
/// ```rust
/// use plumbline::describe::simple_type_name;
///
/// assert_eq!(simple_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(simple_type_name::<Option<&str>>(), "Option<&str>");
/// ```
pub fn simple_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}

fn array_kind<T: Describe>() -> SequenceKind {
    if T::array_base().1 > 0 {
        SequenceKind::NestedArray
    } else {
        SequenceKind::Array
    }
}

fn array_type_name<T: Describe>(len: usize) -> String {
    let (base, dims) = T::array_base();
    format!("{base}[{len}]{}", "[]".repeat(dims))
}

macro_rules! describe_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Describe for $t {
                #[inline]
                fn view(&self) -> View<'_> {
                    View::Scalar(self)
                }
            }
        )*
    };
}

describe_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl Describe for () {
    fn view(&self) -> View<'_> {
        View::Null
    }
}

impl Describe for str {
    fn view(&self) -> View<'_> {
        View::Text(self)
    }
}

impl Describe for String {
    fn view(&self) -> View<'_> {
        View::Text(self)
    }
}

impl Describe for Cow<'_, str> {
    fn view(&self) -> View<'_> {
        View::Text(self)
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Cow<str>")
    }
}

impl<T: Describe> Describe for Option<T> {
    fn view(&self) -> View<'_> {
        match self {
            Some(value) => value.view(),
            None => View::Null,
        }
    }
}

macro_rules! describe_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ptr<T> {
                fn view(&self) -> View<'_> {
                    (**self).view()
                }

                fn type_name(&self) -> Cow<'static, str> {
                    (**self).type_name()
                }
            }
        )*
    };
}

describe_pointer!(Box, Rc, Arc);

impl<T: Describe + ?Sized> Describe for &T {
    fn view(&self) -> View<'_> {
        (**self).view()
    }

    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }
}

impl<K: Describe, V: Describe> Describe for (K, V) {
    fn view(&self) -> View<'_> {
        View::Entry(&self.0, &self.1)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn view(&self) -> View<'_> {
        View::Sequence {
            kind: array_kind::<T>(),
            len: N,
            items: Box::new(self.iter().map(|item| item as &dyn Describe)),
        }
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(array_type_name::<T>(N))
    }

    fn array_base() -> (String, usize) {
        let (base, dims) = T::array_base();
        (base, dims + 1)
    }
}

impl<T: Describe> Describe for [T] {
    fn view(&self) -> View<'_> {
        View::Sequence {
            kind: array_kind::<T>(),
            len: self.len(),
            items: Box::new(self.iter().map(|item| item as &dyn Describe)),
        }
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(array_type_name::<T>(self.len()))
    }
}

macro_rules! describe_collection {
    ($($coll:ident<$t:ident $(, $s:ident)?>),* $(,)?) => {
        $(
            impl<$t: Describe $(, $s)?> Describe for $coll<$t $(, $s)?> {
                fn view(&self) -> View<'_> {
                    View::Sequence {
                        kind: SequenceKind::Collection,
                        len: self.len(),
                        items: Box::new(self.iter().map(|item| item as &dyn Describe)),
                    }
                }
            }
        )*
    };
}

describe_collection!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BTreeSet<T>,
    HashSet<T, S>,
);

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn view(&self) -> View<'_> {
        View::Map {
            len: self.len(),
            entries: Box::new(
                self.iter()
                    .map(|(k, v)| (k as &dyn Describe, v as &dyn Describe)),
            ),
        }
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn view(&self) -> View<'_> {
        View::Map {
            len: self.len(),
            entries: Box::new(
                self.iter()
                    .map(|(k, v)| (k as &dyn Describe, v as &dyn Describe)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type_name_strips_paths() {
        assert_eq!(simple_type_name::<String>(), "String");
        assert_eq!(simple_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(
            simple_type_name::<HashMap<String, Vec<i32>>>(),
            "HashMap<String, Vec<i32>>"
        );
        assert_eq!(simple_type_name::<&str>(), "&str");
    }

    #[test]
    fn test_array_type_names() {
        assert_eq!([1, 2, 3].type_name(), "i32[3]");
        assert_eq!([[1u8; 2]; 4].type_name(), "u8[4][]");
        assert_eq!([[[0i64; 1]; 2]; 5].type_name(), "i64[5][][]");
        let slice: &[String] = &["a".to_string()];
        assert_eq!(slice.type_name(), "String[1]");
    }

    #[test]
    fn test_pointers_delegate() {
        let boxed: Box<[i32; 2]> = Box::new([1, 2]);
        assert_eq!(boxed.type_name(), "i32[2]");
        assert!(matches!(boxed.view(), View::Sequence { len: 2, .. }));

        let text: &str = "abc";
        assert!(matches!(text.view(), View::Text("abc")));
    }

    #[test]
    fn test_sequence_kinds() {
        let kind = |value: &dyn Describe| match value.view() {
            View::Sequence { kind, .. } => Some(kind),
            _ => None,
        };
        assert_eq!(kind(&[1, 2]), Some(SequenceKind::Array));
        assert_eq!(kind(&[[1, 2]]), Some(SequenceKind::NestedArray));
        assert_eq!(kind(&vec![[1, 2]]), Some(SequenceKind::Collection));
        assert_eq!(kind(&"x"), None);
    }

    #[test]
    fn test_option_views() {
        assert!(matches!(None::<i32>.view(), View::Null));
        assert!(matches!(Some("x").view(), View::Text("x")));
    }

    #[test]
    fn test_map_and_entry_views() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        assert!(matches!(map.view(), View::Map { len: 1, .. }));
        assert!(matches!(("k", 2).view(), View::Entry(..)));
    }
}
