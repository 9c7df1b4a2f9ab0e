//! Failure messages
//!
//! When a test fails, the failure is described by a [`MessageContext`]: which
//! test failed, on what value, under which parameter name, against which
//! object. A message is then produced either from a caller-supplied template
//! (see [`template`]) or from the failed check's prefab sentence (see
//! [`prefab`]). Composed tests have no prefab; they fall back to a generic
//! sentence.
//!
//! # Example
//!
//! ```rust
//! use plumbline::message::{template, Identity, MessageContext};
//!
//! let ctx = MessageContext::new(Identity::anonymous::<()>(), &17).with_tag("age");
//! assert_eq!(
//!     template::format_full("${tag} must be ${0}", &ctx, &[&18]),
//!     "age must be 18"
//! );
//! assert_eq!(ctx.default_message().unwrap(), "Invalid value for age: 17");
//! ```

mod context;
pub mod prefab;
pub mod template;

pub use context::{Identity, MessageContext, Prefab, DEFAULT_TAG};
pub use template::Template;
