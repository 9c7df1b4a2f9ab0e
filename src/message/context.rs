//! Message context and test identity

use std::borrow::Cow;
use std::fmt;

use crate::describe::{simple_type_name, Describe, Summarizer};
use crate::error::CorruptError;
use crate::quantifier::Quantifier;

/// Tag used when the caller did not name the parameter.
pub const DEFAULT_TAG: &str = "argument";

/// A default-message generator for one built-in check.
pub type Prefab = fn(&MessageContext<'_>) -> Result<String, CorruptError>;

/// The public face of a test: its name and, for built-in checks, its prefab.
///
/// Anonymous tests (closures, composed tests) are named after their type, with
/// module paths stripped.
#[derive(Clone, Debug)]
pub struct Identity {
    name: Cow<'static, str>,
    prefab: Option<Prefab>,
}

impl Identity {
    /// Identity of a built-in check.
    pub const fn named(name: &'static str, prefab: Prefab) -> Self {
        Identity {
            name: Cow::Borrowed(name),
            prefab: Some(prefab),
        }
    }

    /// Identity of a test with no registered name.
    pub fn anonymous<T: ?Sized>() -> Self {
        Identity {
            name: Cow::Owned(simple_type_name::<T>()),
            prefab: None,
        }
    }

    /// Public name, or the raw type name for anonymous tests.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prefab message generator, if any.
    pub fn prefab(&self) -> Option<Prefab> {
        self.prefab
    }

    /// Whether this identity belongs to a built-in check.
    pub fn is_named(&self) -> bool {
        self.prefab.is_some()
    }

    /// Consume the identity, keeping the name.
    pub fn into_name(self) -> Cow<'static, str> {
        self.name
    }
}

/// Everything known about a single failed test.
///
/// Built once per failure with the `with_*` methods and never changed after.
/// [`flipped`](MessageContext::flipped) derives a copy rather than mutating.
///
/// # Example
///
/// ```rust
/// use plumbline::checks::gt;
/// use plumbline::message::MessageContext;
/// use plumbline::relation::Relation;
///
/// let check = gt();
/// let ctx = MessageContext::new(Relation::<i32, i32>::identity(&check), &3)
///     .with_tag("speed")
///     .with_object(&10);
///
/// assert_eq!(ctx.check_name(), "gt()");
/// assert_eq!(ctx.default_message().unwrap(), "speed must be > 10 (was 3)");
/// ```
#[derive(Clone)]
pub struct MessageContext<'a> {
    identity: Identity,
    arg: &'a dyn Describe,
    declared_type: Option<Cow<'a, str>>,
    tag: Option<Cow<'a, str>>,
    object: Option<&'a dyn Describe>,
    quantifier: Option<Quantifier>,
    negated: bool,
    summarizer: Summarizer,
}

impl<'a> MessageContext<'a> {
    /// Context for `identity` failing on `arg`.
    pub fn new(identity: Identity, arg: &'a dyn Describe) -> Self {
        MessageContext {
            identity,
            arg,
            declared_type: None,
            tag: None,
            object: None,
            quantifier: None,
            negated: false,
            summarizer: Summarizer::new(),
        }
    }

    /// Name the parameter under test.
    pub fn with_tag(mut self, tag: impl Into<Cow<'a, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Name the declared type of the argument, overriding its runtime type.
    pub fn with_declared_type(mut self, name: impl Into<Cow<'a, str>>) -> Self {
        self.declared_type = Some(name.into());
        self
    }

    /// Set the relation's object.
    pub fn with_object(mut self, object: &'a dyn Describe) -> Self {
        self.object = Some(object);
        self
    }

    /// Record that the object is a candidate list evaluated under `quantifier`.
    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Self {
        self.quantifier = Some(quantifier);
        self
    }

    /// Record whether the test was expected to fail rather than pass.
    pub fn negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Use `summarizer` for rendering the argument and object.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// The failed test's identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Public name of the failed test.
    pub fn check_name(&self) -> &str {
        self.identity.name()
    }

    /// The argument value.
    pub fn arg(&self) -> &'a dyn Describe {
        self.arg
    }

    /// Bounded rendering of the argument value.
    pub fn arg_string(&self) -> String {
        self.summarizer.summarize(self.arg)
    }

    /// Declared type if one was given, otherwise the argument's runtime type.
    pub fn type_name(&self) -> Cow<'_, str> {
        match &self.declared_type {
            Some(name) => Cow::Borrowed(name.as_ref()),
            None => self.arg.type_name(),
        }
    }

    /// The parameter name, or [`DEFAULT_TAG`].
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    /// The relation's object, if any.
    pub fn object(&self) -> Option<&'a dyn Describe> {
        self.object
    }

    /// Bounded rendering of the object, if any.
    pub fn object_string(&self) -> Option<String> {
        self.object.map(|object| self.summarizer.summarize(object))
    }

    /// The object as it reads in a sentence, prefixed with the quantifier
    /// phrase when there is one ("any of [1, 2]").
    pub fn object_phrase(&self) -> Option<String> {
        let object = self.object_string()?;
        Some(match self.quantifier {
            Some(q) => format!("{} {}", q.phrase(), object),
            None => object,
        })
    }

    /// The quantifier the object was evaluated under, if any.
    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    /// A copy of this context with the negation flag inverted.
    ///
    /// Lets the prefab of a check reuse the sentence of its opposite
    /// ("not empty" is "empty", negated).
    pub fn flipped(&self) -> MessageContext<'a> {
        let mut flipped = self.clone();
        flipped.negated = !flipped.negated;
        flipped
    }

    /// Whether the test was negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The summarizer used for values.
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// The message to use when the caller supplied no template.
    ///
    /// Built-in checks use their prefab; anonymous tests get a generic
    /// sentence. Fails only when a prefab meets a value it cannot describe.
    pub fn default_message(&self) -> Result<String, CorruptError> {
        match self.identity.prefab() {
            Some(prefab) => prefab(self),
            None => Ok(self.generic_message()),
        }
    }

    /// The sentence used for tests without a prefab.
    ///
    /// A negated test without an object gets a `(must not satisfy check)`
    /// suffix so that `is` and `is_not` failures read differently.
    pub fn generic_message(&self) -> String {
        match self.object_phrase() {
            None if self.negated => format!(
                "Invalid value for {}: {} (must not satisfy check)",
                self.tag(),
                self.arg_string()
            ),
            None => format!("Invalid value for {}: {}", self.tag(), self.arg_string()),
            Some(object) => format!(
                "{} ({}) must {}satisfy relation with {}",
                self.tag(),
                self.arg_string(),
                if self.negated { "not " } else { "" },
                object
            ),
        }
    }
}

impl fmt::Debug for MessageContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContext")
            .field("check", &self.check_name())
            .field("arg", &self.arg_string())
            .field("type", &self.type_name())
            .field("tag", &self.tag())
            .field("object", &self.object_string())
            .field("quantifier", &self.quantifier)
            .field("negated", &self.negated)
            .finish()
    }
}
