//! Composable predicates
//!
//! A predicate is an immutable test over a value. Predicates compose with
//! `or`, `and` and `not`, with relations against fixed objects, with
//! quantified relations over a set of subjects, and with tests on values that
//! have nothing to do with the one under test. Every composition returns a new
//! predicate and leaves its operands untouched.
//!
//! Two families exist side by side:
//!
//! - [`Predicate<T>`] tests `&T` and composes through [`PredicateExt`].
//! - [`IntPredicate`] tests plain `i32` and composes through
//!   [`IntPredicateExt`], taking integer relations directly.
//!
//! Closures of the matching shape implement both traits.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::*;
//!
//! let username = (|s: &str| s.len() >= 3)
//!     .and(|s: &str| s.chars().all(|c| c.is_alphanumeric() || c == '_'))
//!     .and_not(|s: &str| s.starts_with('_'));
//!
//! assert!(username.check("john_doe"));
//! assert!(!username.check("ab"));
//! assert!(!username.check("_hidden"));
//! ```
//!
//! # Algebra
//!
//! ```rust
//! use plumbline::predicate::*;
//!
//! let even = |n: &i32| n % 2 == 0;
//! for n in -10..10 {
//!     assert_eq!(even.or(invalid()).check(&n), even(&n));
//!     assert_eq!(even.and(valid()).check(&n), even(&n));
//!     assert!(even.or_not(even).check(&n));
//! }
//! ```

mod adapters;
mod combinators;
mod erased;
mod int;

pub mod prelude;

// Re-export core traits
pub use combinators::{Predicate, PredicateExt};
pub use int::{IntPredicate, IntPredicateExt};

// Re-export combinator types
pub use combinators::{invalid, valid, And, Invalid, Not, Or, Valid};
pub use int::{
    invalid_int, valid_int, IntAnd, IntNot, IntOr, IntQuantified, IntRelatedTo, IntRelatedToAll,
    IntRelatedToAny, IntRelatedToObj, InvalidInt, ValidInt,
};

// Re-export adapters
pub use adapters::{
    Quantified, RelatedTo, RelatedToAll, RelatedToAny, RelatedToInt, That, ThatRelated,
};
pub use erased::Erased;
