//! Running checks against a value
//!
//! A thin adapter between callers and the core: evaluate a test against a
//! subject, and on failure render a message and return it as an [`Error`].
//!
//! - [`that`] wraps any describable value; [`that_int`] wraps an `i32`.
//! - `is` / `is_not` apply predicates, `has` / `has_not` apply relations.
//! - The `*_with` forms take a custom template. With no positional arguments
//!   only the reserved names (`${test}`, `${arg}`, `${type}`, `${tag}`,
//!   `${obj}`) are resolved; with arguments `${0}`, `${1}`, ... are resolved
//!   as well. Without a template the check's default message is used.
//!
//! Every operation returns `Result<Self, Error>`, so several checks on the
//! same subject chain with `?`. To raise a different error type, map it:
//! `that(&x).is(check).map_err(MyError::from)`.
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::prelude::*;
//! use plumbline::verify::{that, that_int};
//!
//! fn open(path: &str, retries: i32) -> Result<(), plumbline::Error> {
//!     that(&path).tag("path").is_not(blank())?.has(ends_with(), &".toml")?;
//!     that_int(retries).tag("retries").is_not(negative())?;
//!     Ok(())
//! }
//!
//! assert!(open("app.toml", 3).is_ok());
//! let err = open("app.toml", -1).unwrap_err();
//! assert_eq!(err.to_string(), "retries must not be negative (was -1)");
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::describe::{Describe, Summarizer};
use crate::error::{ArgumentError, Error};
use crate::message::{template, Identity, MessageContext};
use crate::predicate::{IntPredicate, Predicate};
use crate::quantifier::Quantifier;
use crate::relation::{IntObjRelation, IntRelation, ObjIntRelation, Relation};

/// Name reported by [`Subject::fail`] and [`IntSubject::fail`].
pub const FAIL: &str = "fail()";

/// A caller-supplied template and its positional arguments.
type Custom<'m> = (&'m str, &'m [&'m dyn Display]);

/// The value under test, with the naming details used in messages.
///
/// Created by [`that`].
pub struct Subject<'a, T: ?Sized> {
    value: &'a T,
    tag: Option<Cow<'a, str>>,
    declared_type: Option<Cow<'a, str>>,
    summarizer: Summarizer,
}

/// Start checking `value`.
pub fn that<T: Describe + ?Sized>(value: &T) -> Subject<'_, T> {
    Subject {
        value,
        tag: None,
        declared_type: None,
        summarizer: Summarizer::new(),
    }
}

impl<'a, T: Describe + ?Sized> Subject<'a, T> {
    /// Name the parameter in messages (defaults to "argument").
    pub fn tag(mut self, tag: impl Into<Cow<'a, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Name the parameter's declared type for `${type}`.
    pub fn declared_type(mut self, name: impl Into<Cow<'a, str>>) -> Self {
        self.declared_type = Some(name.into());
        self
    }

    /// Bound the rendering of values in messages.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// The value under test.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Fail unless `test` holds.
    pub fn is<P: Predicate<T>>(self, test: P) -> Result<Self, Error> {
        let holds = test.check(self.value);
        self.settle(holds, Predicate::identity(&test), false, None)
    }

    /// Fail if `test` holds.
    pub fn is_not<P: Predicate<T>>(self, test: P) -> Result<Self, Error> {
        let holds = !test.check(self.value);
        self.settle(holds, Predicate::identity(&test), true, None)
    }

    /// Fail unless `test` holds, rendering `template` on failure.
    ///
    /// ```rust
    /// use plumbline::verify::that;
    ///
    /// let age = 17;
    /// let err = that(&age)
    ///     .tag("age")
    ///     .is_with(|n: &i32| *n >= 18, "${tag} must be ${0}", &[&18])
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "age must be 18");
    /// ```
    pub fn is_with<P: Predicate<T>>(
        self,
        test: P,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Self, Error> {
        let holds = test.check(self.value);
        self.settle(holds, Predicate::identity(&test), false, Some((template, args)))
    }

    /// Fail unless the value has `relation` to `object`.
    pub fn has<O, R>(self, relation: R, object: &O) -> Result<Self, Error>
    where
        O: Describe,
        R: Relation<T, O>,
    {
        let holds = relation.relates(self.value, object);
        self.settle_related(holds, Relation::identity(&relation), object, None, false, None)
    }

    /// Fail if the value has `relation` to `object`.
    pub fn has_not<O, R>(self, relation: R, object: &O) -> Result<Self, Error>
    where
        O: Describe,
        R: Relation<T, O>,
    {
        let holds = !relation.relates(self.value, object);
        self.settle_related(holds, Relation::identity(&relation), object, None, true, None)
    }

    /// Fail unless the value has `relation` to `object`, rendering
    /// `template` on failure.
    pub fn has_with<O, R>(
        self,
        relation: R,
        object: &O,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Self, Error>
    where
        O: Describe,
        R: Relation<T, O>,
    {
        let holds = relation.relates(self.value, object);
        let identity = Relation::identity(&relation);
        self.settle_related(holds, identity, object, None, false, Some((template, args)))
    }

    /// Fail unless the value has `relation` to the integer `object`.
    ///
    /// ```rust
    /// use plumbline::predicate::prelude::*;
    /// use plumbline::verify::that;
    ///
    /// let name = "abcdef";
    /// let err = that(&name).tag("name").has_int(len_lte(), 4).unwrap_err();
    /// assert_eq!(err.to_string(), "name length must be <= 4 (was 6)");
    /// ```
    pub fn has_int<R: ObjIntRelation<T>>(self, relation: R, object: i32) -> Result<Self, Error> {
        let holds = relation.relates_obj_int(self.value, object);
        let identity = ObjIntRelation::identity(&relation);
        self.settle_related(holds, identity, &object, None, false, None)
    }

    /// Fail unless `relation` holds between the value and the candidates
    /// under `quantifier`.
    ///
    /// An empty candidate list is a [`CompositionError`](crate::error::CompositionError).
    ///
    /// ```rust
    /// use plumbline::predicate::prelude::*;
    /// use plumbline::quantifier::Quantifier;
    /// use plumbline::verify::that;
    ///
    /// let scheme = "gopher";
    /// let err = that(&scheme)
    ///     .tag("scheme")
    ///     .has_quantified(Quantifier::Any, eq(), &["http", "https"])
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "scheme must be equal to any of [http, https] (was gopher)"
    /// );
    /// ```
    pub fn has_quantified<O, R>(
        self,
        quantifier: Quantifier,
        relation: R,
        candidates: &[O],
    ) -> Result<Self, Error>
    where
        O: Describe,
        R: Relation<T, O>,
    {
        let holds = quantifier.evaluate(self.value, &relation, candidates)?;
        let identity = Relation::identity(&relation);
        self.settle_related(holds, identity, &candidates, Some(quantifier), false, None)
    }

    /// Fail unconditionally with a positional-only message.
    pub fn fail(&self, template: &str, args: &[&dyn Display]) -> Error {
        let ctx = self.context(Identity::anonymous::<T>());
        failure(FAIL.into(), &ctx, template::format_positional(template, args))
    }

    fn context(&self, identity: Identity) -> MessageContext<'_> {
        let ctx = MessageContext::new(identity, &self.value).with_summarizer(self.summarizer);
        let ctx = match &self.tag {
            Some(tag) => ctx.with_tag(tag.as_ref()),
            None => ctx,
        };
        match &self.declared_type {
            Some(name) => ctx.with_declared_type(name.as_ref()),
            None => ctx,
        }
    }

    fn settle(
        self,
        holds: bool,
        identity: Identity,
        negated: bool,
        custom: Option<Custom<'_>>,
    ) -> Result<Self, Error> {
        if holds {
            return Ok(self);
        }
        Err(reject(self.context(identity).negated(negated), custom))
    }

    fn settle_related(
        self,
        holds: bool,
        identity: Identity,
        object: &dyn Describe,
        quantifier: Option<Quantifier>,
        negated: bool,
        custom: Option<Custom<'_>>,
    ) -> Result<Self, Error> {
        if holds {
            return Ok(self);
        }
        let ctx = self.context(identity).with_object(object).negated(negated);
        let ctx = match quantifier {
            Some(q) => ctx.with_quantifier(q),
            None => ctx,
        };
        Err(reject(ctx, custom))
    }
}

impl<T: Describe + ?Sized> std::fmt::Debug for Subject<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("value", &self.summarizer.summarize(&self.value))
            .field("tag", &self.tag)
            .field("declared_type", &self.declared_type)
            .finish()
    }
}

/// An `i32` under test. Created by [`that_int`].
#[derive(Clone, Debug)]
pub struct IntSubject<'a> {
    value: i32,
    tag: Option<Cow<'a, str>>,
    declared_type: Option<Cow<'a, str>>,
    summarizer: Summarizer,
}

/// Start checking the integer `value`.
pub fn that_int<'a>(value: i32) -> IntSubject<'a> {
    IntSubject {
        value,
        tag: None,
        declared_type: None,
        summarizer: Summarizer::new(),
    }
}

impl<'a> IntSubject<'a> {
    /// Name the parameter in messages (defaults to "argument").
    pub fn tag(mut self, tag: impl Into<Cow<'a, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Name the parameter's declared type for `${type}`.
    pub fn declared_type(mut self, name: impl Into<Cow<'a, str>>) -> Self {
        self.declared_type = Some(name.into());
        self
    }

    /// Bound the rendering of values in messages.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// The value under test.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Fail unless `test` holds.
    ///
    /// ```rust
    /// use plumbline::predicate::prelude::*;
    /// use plumbline::verify::that_int;
    ///
    /// let err = that_int(7).tag("count").is(even()).unwrap_err();
    /// assert_eq!(err.to_string(), "count must be even (was 7)");
    /// ```
    pub fn is<P: IntPredicate>(self, test: P) -> Result<Self, Error> {
        let holds = test.check_int(self.value);
        self.settle(holds, IntPredicate::identity(&test), false, None)
    }

    /// Fail if `test` holds.
    pub fn is_not<P: IntPredicate>(self, test: P) -> Result<Self, Error> {
        let holds = !test.check_int(self.value);
        self.settle(holds, IntPredicate::identity(&test), true, None)
    }

    /// Fail unless `test` holds, rendering `template` on failure.
    pub fn is_with<P: IntPredicate>(
        self,
        test: P,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Self, Error> {
        let holds = test.check_int(self.value);
        self.settle(holds, IntPredicate::identity(&test), false, Some((template, args)))
    }

    /// Fail unless the value has `relation` to `object`.
    pub fn has<R: IntRelation>(self, relation: R, object: i32) -> Result<Self, Error> {
        let holds = relation.relates_int(self.value, object);
        self.settle_related(holds, IntRelation::identity(&relation), &object, None, false, None)
    }

    /// Fail if the value has `relation` to `object`.
    pub fn has_not<R: IntRelation>(self, relation: R, object: i32) -> Result<Self, Error> {
        let holds = !relation.relates_int(self.value, object);
        self.settle_related(holds, IntRelation::identity(&relation), &object, None, true, None)
    }

    /// Fail unless the value has `relation` to `object`, rendering
    /// `template` on failure.
    pub fn has_with<R: IntRelation>(
        self,
        relation: R,
        object: i32,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Self, Error> {
        let holds = relation.relates_int(self.value, object);
        let identity = IntRelation::identity(&relation);
        self.settle_related(holds, identity, &object, None, false, Some((template, args)))
    }

    /// Fail unless the value has `relation` to a non-integer `object`.
    ///
    /// ```rust
    /// use plumbline::predicate::prelude::*;
    /// use plumbline::verify::that_int;
    ///
    /// let items = vec!["a", "b"];
    /// let err = that_int(2).tag("index").has_obj(index_of(), &items).unwrap_err();
    /// assert_eq!(err.to_string(), "index must be >= 0 and < 2 (was 2)");
    /// ```
    pub fn has_obj<O, R>(self, relation: R, object: &O) -> Result<Self, Error>
    where
        O: Describe + ?Sized,
        R: IntObjRelation<O>,
    {
        let holds = relation.relates_int_obj(self.value, object);
        let identity = IntObjRelation::identity(&relation);
        self.settle_related(holds, identity, &object, None, false, None)
    }

    /// Fail unless `relation` holds between the value and the candidates
    /// under `quantifier`.
    pub fn has_quantified<R: IntRelation>(
        self,
        quantifier: Quantifier,
        relation: R,
        candidates: &[i32],
    ) -> Result<Self, Error> {
        let holds = quantifier.evaluate_int(self.value, &relation, candidates)?;
        let identity = IntRelation::identity(&relation);
        self.settle_related(holds, identity, &candidates, Some(quantifier), false, None)
    }

    /// Fail unconditionally with a positional-only message.
    pub fn fail(&self, template: &str, args: &[&dyn Display]) -> Error {
        let ctx = self.context(Identity::anonymous::<i32>());
        failure(FAIL.into(), &ctx, template::format_positional(template, args))
    }

    fn context(&self, identity: Identity) -> MessageContext<'_> {
        let ctx = MessageContext::new(identity, &self.value).with_summarizer(self.summarizer);
        let ctx = match &self.tag {
            Some(tag) => ctx.with_tag(tag.as_ref()),
            None => ctx,
        };
        match &self.declared_type {
            Some(name) => ctx.with_declared_type(name.as_ref()),
            None => ctx,
        }
    }

    fn settle(
        self,
        holds: bool,
        identity: Identity,
        negated: bool,
        custom: Option<Custom<'_>>,
    ) -> Result<Self, Error> {
        if holds {
            return Ok(self);
        }
        Err(reject(self.context(identity).negated(negated), custom))
    }

    fn settle_related(
        self,
        holds: bool,
        identity: Identity,
        object: &dyn Describe,
        quantifier: Option<Quantifier>,
        negated: bool,
        custom: Option<Custom<'_>>,
    ) -> Result<Self, Error> {
        if holds {
            return Ok(self);
        }
        let ctx = self.context(identity).with_object(object).negated(negated);
        let ctx = match quantifier {
            Some(q) => ctx.with_quantifier(q),
            None => ctx,
        };
        Err(reject(ctx, custom))
    }
}

// Custom templates never fail; default messages fail only on a corrupt prefab.
fn reject(ctx: MessageContext<'_>, custom: Option<Custom<'_>>) -> Error {
    let message = match custom {
        Some((template, [])) => template::format_named(template, &ctx),
        Some((template, args)) => template::format_full(template, &ctx, args),
        None => match ctx.default_message() {
            Ok(message) => message,
            Err(corrupt) => return Error::Corrupt(corrupt),
        },
    };
    failure(ctx.identity().clone().into_name(), &ctx, message)
}

fn failure(check: Cow<'static, str>, ctx: &MessageContext<'_>, message: String) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        check = %check,
        tag = %ctx.tag(),
        negated = ctx.is_negated(),
        "argument rejected"
    );
    ArgumentError::new(check, ctx.tag(), message).into()
}
