//! # Plumbline
//!
//! > *"Check it against the line before you build on it"*
//!
//! A library for composable argument checks with readable failure messages.
//!
//! ## Philosophy
//!
//! A check is an immutable value. Small checks compose into larger ones with
//! `or`, `and` and `not`; composing never changes an operand. When a check
//! fails, the failure is described by a sentence built from a template or,
//! for the built-in checks, from a negation-aware default message. Values in
//! messages are summarized so a ten-thousand-element list never ends up in a
//! log line.
//!
//! ## Quick Example
//!
//! ```rust
//! use plumbline::predicate::prelude::*;
//! use plumbline::verify::{that, that_int};
//!
//! fn resize(name: &str, width: i32) -> Result<(), plumbline::Error> {
//!     that(&name).tag("name").is_not(blank())?.has_int(len_lte(), 32)?;
//!     that_int(width)
//!         .tag("width")
//!         .is(positive().and_relation(multiple_of(), 8))?;
//!     Ok(())
//! }
//!
//! assert!(resize("banner", 640).is_ok());
//!
//! let err = resize("", 640).unwrap_err();
//! assert_eq!(err.to_string(), "name must not be blank");
//!
//! // composed checks are anonymous and get a generic message
//! let err = resize("banner", 100).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid value for width: 100");
//! ```
//!
//! ## Modules
//!
//! - [`predicate`]: predicate traits and the composition algebra
//! - [`relation`]: binary tests, converse and negation
//! - [`quantifier`]: ALL / ANY / NONE over candidate lists
//! - [`checks`]: built-in named checks
//! - [`message`]: message context, templates, default messages
//! - [`describe`]: value views and bounded summaries
//! - [`verify`]: running checks and reporting failures
//! - [`error`]: error taxonomy
//! - [`testing`]: test doubles and assertion macros

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checks;
pub mod describe;
pub mod error;
pub mod message;
pub mod predicate;
pub mod quantifier;
pub mod relation;
pub mod testing;
pub mod verify;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use describe::{Describe, Summarizer};
pub use error::{ArgumentError, CastError, CompositionError, CorruptError, Error};
pub use message::{MessageContext, Template};
pub use predicate::{IntPredicate, IntPredicateExt, Predicate, PredicateExt};
pub use quantifier::Quantifier;
pub use relation::{IntObjRelation, IntRelation, ObjIntRelation, Relation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::predicate::prelude::*;
    pub use crate::quantifier::Quantifier;
    pub use crate::verify::{that, that_int};
}
