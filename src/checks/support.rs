//! Capability traits used by the built-in checks
//!
//! These describe what a value must offer for a check to apply to it: a size
//! ([`Extent`]), an index range ([`Indexable`]), or membership
//! ([`Container`]). They are implemented for the standard strings and
//! collections, and can be implemented for your own types.
//!
//! # Example
//!
//! ```rust
//! use plumbline::checks::{Container, Extent, Indexable};
//!
//! assert_eq!("héllo".extent(), 6);
//! assert_eq!(vec![1, 2, 3].index_len(), 3);
//! assert!([1, 2, 3].holds(&2));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A value with a size: bytes for strings, elements for collections.
pub trait Extent {
    /// Number of bytes or elements.
    fn extent(&self) -> usize;
}

/// A value addressable by positions `0..index_len()`.
pub trait Indexable {
    /// Number of valid positions.
    fn index_len(&self) -> usize;
}

/// A collection that can be asked about membership of an `E`.
pub trait Container<E: ?Sized> {
    /// Whether `element` is a member.
    fn holds(&self, element: &E) -> bool;
}

impl<T: Extent + ?Sized> Extent for &T {
    #[inline]
    fn extent(&self) -> usize {
        (**self).extent()
    }
}

impl<T: Indexable + ?Sized> Indexable for &T {
    #[inline]
    fn index_len(&self) -> usize {
        (**self).index_len()
    }
}

impl<E: ?Sized, C: Container<E> + ?Sized> Container<E> for &C {
    #[inline]
    fn holds(&self, element: &E) -> bool {
        (**self).holds(element)
    }
}

macro_rules! text {
    ($($t:ty),*) => {
        $(
            impl Extent for $t {
                #[inline]
                fn extent(&self) -> usize {
                    self.len()
                }
            }

            impl Indexable for $t {
                #[inline]
                fn index_len(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

text!(str, String);

macro_rules! sequence {
    ($($t:ident),*) => {
        $(
            impl<T> Extent for $t<T> {
                #[inline]
                fn extent(&self) -> usize {
                    self.len()
                }
            }

            impl<T> Indexable for $t<T> {
                #[inline]
                fn index_len(&self) -> usize {
                    self.len()
                }
            }

            impl<T: PartialEq> Container<T> for $t<T> {
                #[inline]
                fn holds(&self, element: &T) -> bool {
                    self.contains(element)
                }
            }
        )*
    };
}

sequence!(Vec, VecDeque, LinkedList);

impl<T> Extent for [T] {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }
}

impl<T> Indexable for [T] {
    #[inline]
    fn index_len(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Container<T> for [T] {
    #[inline]
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, const N: usize> Extent for [T; N] {
    #[inline]
    fn extent(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    #[inline]
    fn index_len(&self) -> usize {
        N
    }
}

impl<T: PartialEq, const N: usize> Container<T> for [T; N] {
    #[inline]
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, S> Extent for HashSet<T, S> {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container<T> for HashSet<T, S> {
    #[inline]
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T> Extent for BTreeSet<T> {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    #[inline]
    fn holds(&self, element: &T) -> bool {
        self.contains(element)
    }
}

// Maps hold their keys.
impl<K, V, S> Extent for HashMap<K, V, S> {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Container<K> for HashMap<K, V, S> {
    #[inline]
    fn holds(&self, element: &K) -> bool {
        self.contains_key(element)
    }
}

impl<K, V> Extent for BTreeMap<K, V> {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> Container<K> for BTreeMap<K, V> {
    #[inline]
    fn holds(&self, element: &K) -> bool {
        self.contains_key(element)
    }
}
