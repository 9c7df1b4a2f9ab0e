//! Error taxonomy
//!
//! Four kinds of failure can come out of this crate, and they are kept apart so
//! callers can tell "your data is invalid" from "this check was misused":
//!
//! - [`ArgumentError`]: an ordinary validation failure carrying a rendered message.
//! - [`CompositionError`]: a test was composed from invalid parts (for example an
//!   empty candidate collection). Raised eagerly, before any evaluation.
//! - [`CastError`]: an erased operand was applied to a value of a different
//!   runtime type. Only the permissive `*_dyn` combinators can produce it.
//! - [`CorruptError`]: a check or message generator met a value shape it cannot
//!   support.
//!
//! [`Error`] is the umbrella returned by the [`verify`](crate::verify) adapter.
//!
//! # Example
//!
//! ```rust
//! use plumbline::error::{CompositionError, Error};
//!
//! let err: Error = CompositionError::EmptyCollection { what: "subjects" }.into();
//! assert_eq!(err.to_string(), "subjects must not be empty");
//! assert!(err.is_misuse());
//! ```

use std::borrow::Cow;

/// A test could not be composed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    /// A collection that must hold at least one element was empty.
    #[error("{what} must not be empty")]
    EmptyCollection {
        /// What the collection was used for ("subjects", "candidates", ...).
        what: &'static str,
    },
}

/// An erased operand received a value of the wrong runtime type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot cast {from} to {to}")]
pub struct CastError {
    /// Runtime type of the value under test.
    pub from: &'static str,
    /// Type the operand was written against.
    pub to: &'static str,
}

/// A check or prefab message was applied to a value it cannot handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal invariant violated in {check}: {detail}")]
pub struct CorruptError {
    /// Name of the check that was misapplied.
    pub check: Cow<'static, str>,
    /// What went wrong.
    pub detail: String,
}

impl CorruptError {
    /// Create a new corrupt-state error.
    pub fn new(check: impl Into<Cow<'static, str>>, detail: impl Into<String>) -> Self {
        let err = CorruptError {
            check: check.into(),
            detail: detail.into(),
        };
        #[cfg(feature = "tracing")]
        tracing::error!(check = %err.check, detail = %err.detail, "check misapplied");
        err
    }
}

/// An argument failed validation.
///
/// `Display` yields the rendered message and nothing else, so it can be shown
/// to users as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ArgumentError {
    check: Cow<'static, str>,
    tag: String,
    message: String,
}

impl ArgumentError {
    /// Create a new argument error.
    pub fn new(
        check: impl Into<Cow<'static, str>>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ArgumentError {
            check: check.into(),
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Name of the failed check (or its raw identifier when anonymous).
    pub fn check(&self) -> &str {
        &self.check
    }

    /// Parameter name the message refers to.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error, keeping only the message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Any failure surfaced by the [`verify`](crate::verify) adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value did not pass the check.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// The check was built from invalid parts.
    #[error(transparent)]
    Composition(#[from] CompositionError),
    /// The check was applied to a value shape it does not support.
    #[error(transparent)]
    Corrupt(#[from] CorruptError),
}

impl Error {
    /// True for failures caused by bad input data rather than library misuse.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::Argument(_))
    }

    /// True for failures that signal a defect in how a check was applied.
    pub fn is_misuse(&self) -> bool {
        !self.is_invalid_argument()
    }

    /// The argument error, if this is one.
    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            Error::Argument(err) => Some(err),
            _ => None,
        }
    }
}
