//! Testing utilities
//!
//! Test doubles and assertion macros for code that composes and runs checks.
//!
//! # Examples
//!
//! ## Observing evaluation
//!
//! ```rust
//! use plumbline::predicate::*;
//! use plumbline::testing::Probe;
//!
//! let right = Probe::new(|n: &i32| *n > 100);
//! let calls = right.counter();
//!
//! let p = (|n: &i32| n % 2 == 0).or(right);
//! assert!(p.check(&4));
//! assert_eq!(calls.get(), 0);
//! assert!(!p.check(&7));
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use plumbline::predicate::prelude::*;
//! use plumbline::verify::that_int;
//! use plumbline::{assert_message, assert_passes, assert_rejects};
//!
//! assert_passes!(that_int(4).is(even()));
//! assert_rejects!(that_int(3).is(even()));
//! assert_message!(that_int(3).tag("n").is(even()), "n must be even (was 3)");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::predicate::{IntPredicate, Predicate};

/// A predicate that counts how often it is evaluated.
///
/// Wraps another predicate and forwards to it. The count is shared with every
/// [`Counter`] taken from the probe, so it stays observable after the probe
/// has been moved into a composition.
#[derive(Debug)]
pub struct Probe<P> {
    inner: P,
    calls: Arc<AtomicUsize>,
}

/// Read handle for a [`Probe`]'s evaluation count.
#[derive(Clone, Debug)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    /// Evaluations so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<P> Probe<P> {
    /// Count evaluations of `inner`.
    pub fn new(inner: P) -> Self {
        Probe {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handle to the evaluation count.
    pub fn counter(&self) -> Counter {
        Counter(Arc::clone(&self.calls))
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Probe<P> {
    fn check(&self, value: &T) -> bool {
        self.hit();
        self.inner.check(value)
    }
}

impl<P: IntPredicate> IntPredicate for Probe<P> {
    fn check_int(&self, value: i32) -> bool {
        self.hit();
        self.inner.check_int(value)
    }
}

/// Assert that a check passed.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::prelude::*;
/// use plumbline::{assert_passes, verify::that};
///
/// assert_passes!(that(&"abc").is(not_empty()));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected check to pass, got: {}", e);
            }
        }
    };
}

/// Assert that a check rejected its argument.
///
/// Panics on success, and on errors that signal misuse rather than a bad
/// argument.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::prelude::*;
/// use plumbline::{assert_rejects, verify::that};
///
/// assert_rejects!(that(&"").is(not_empty()));
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err($crate::Error::Argument(_)) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected a rejected argument, got misuse: {}", e);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected check to reject, but it passed");
            }
        }
    };
}

/// Assert that a check rejected its argument with a specific message.
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::prelude::*;
/// use plumbline::{assert_message, verify::that};
///
/// assert_message!(that(&"").tag("name").is(not_empty()), "name must not be empty");
/// ```
#[macro_export]
macro_rules! assert_message {
    ($result:expr, $expected:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.to_string(), $expected);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected check to fail with {:?}, but it passed", $expected);
            }
        }
    };
}
