//! Message templates
//!
//! A template is plain text with `${...}` placeholders. A placeholder holds
//! either a reserved name, resolved from the [`MessageContext`]:
//!
//! | name | resolves to |
//! |---|---|
//! | `${test}` | the check's name |
//! | `${arg}` | the argument, summarized |
//! | `${type}` | the declared type, or the argument's runtime type |
//! | `${tag}` | the parameter name (default `"argument"`) |
//! | `${obj}` | the relation's object, summarized |
//!
//! or a non-negative integer `N`, resolved to the `N`-th positional argument.
//!
//! Formatting never fails. A placeholder that cannot be resolved is copied to
//! the output as is, delimiters included, and a `${` without a closing brace
//! is kept as literal text.
//!
//! The template is scanned once, left to right, writing straight into the
//! output buffer.
//!
//! # Example
//!
//! ```rust
//! use plumbline::message::{template, Identity, MessageContext};
//!
//! let ctx = MessageContext::new(Identity::anonymous::<()>(), &"x").with_tag("name");
//! assert_eq!(template::format_named("${tag} is ${bogus}", &ctx), "name is ${bogus}");
//! assert_eq!(template::format_positional("${0} of ${1}", &[&3, &"5"]), "3 of 5");
//! assert_eq!(template::format_positional("open ${0", &[&1]), "open ${0");
//! ```

use std::borrow::Cow;
use std::fmt;

use super::MessageContext;

const START: &str = "${";
const END: char = '}';

type Lookup = fn(&MessageContext<'_>) -> Option<String>;

static RESERVED: [(&str, Lookup); 5] = [
    ("test", |ctx| Some(ctx.check_name().to_owned())),
    ("arg", |ctx| Some(ctx.arg_string())),
    ("type", |ctx| Some(ctx.type_name().into_owned())),
    ("tag", |ctx| Some(ctx.tag().to_owned())),
    ("obj", |ctx| ctx.object_string()),
];

/// Resolves the token between `${` and `}`.
trait Resolve {
    fn resolve(&self, token: &str) -> Option<Cow<'_, str>>;
}

struct Named<'c, 'a>(&'c MessageContext<'a>);

impl Resolve for Named<'_, '_> {
    fn resolve(&self, token: &str) -> Option<Cow<'_, str>> {
        RESERVED
            .iter()
            .find(|(name, _)| *name == token)
            .and_then(|(_, lookup)| lookup(self.0))
            .map(Cow::Owned)
    }
}

struct Positional<'p>(&'p [&'p dyn fmt::Display]);

impl Resolve for Positional<'_> {
    fn resolve(&self, token: &str) -> Option<Cow<'_, str>> {
        let index = positional_index(token)?;
        self.0
            .get(index)
            .map(|arg| Cow::Owned(arg.to_string()))
    }
}

struct Full<'c, 'a, 'p>(Named<'c, 'a>, Positional<'p>);

impl Resolve for Full<'_, '_, '_> {
    fn resolve(&self, token: &str) -> Option<Cow<'_, str>> {
        self.0.resolve(token).or_else(|| self.1.resolve(token))
    }
}

fn positional_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn render<R: Resolve>(template: &str, resolver: &R) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    loop {
        let Some(start) = rest.find(START) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..start]);
        let body = &rest[start + START.len()..];
        let Some(end) = body.find(END) else {
            out.push_str(&rest[start..]);
            break;
        };
        let token = &body[..end];
        match resolver.resolve(token) {
            Some(value) => out.push_str(&value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(token, "unresolved message placeholder");
                out.push_str(&rest[start..start + START.len() + end + 1]);
            }
        }
        rest = &body[end + 1..];
    }
    out
}

/// Resolve reserved names and positional arguments.
pub fn format_full(template: &str, ctx: &MessageContext<'_>, args: &[&dyn fmt::Display]) -> String {
    render(template, &Full(Named(ctx), Positional(args)))
}

/// Resolve reserved names only; `${0}` and friends stay as they are.
pub fn format_named(template: &str, ctx: &MessageContext<'_>) -> String {
    render(template, &Named(ctx))
}

/// Resolve positional arguments only; reserved names stay as they are.
pub fn format_positional(template: &str, args: &[&dyn fmt::Display]) -> String {
    render(template, &Positional(args))
}

/// A message template.
///
/// A thin wrapper for callers that keep templates around as values.
///
/// ```rust
/// use plumbline::message::Template;
///
/// let t = Template::new("expected ${0}");
/// assert!(t.has_placeholders());
/// assert_eq!(t.format_positional(&[&42]), "expected 42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template<'t>(Cow<'t, str>);

impl<'t> Template<'t> {
    /// Wrap a template string.
    pub fn new(template: impl Into<Cow<'t, str>>) -> Self {
        Template(template.into())
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text contains a `${` marker at all.
    pub fn has_placeholders(&self) -> bool {
        self.0.contains(START)
    }

    /// See [`format_full`].
    pub fn format_full(&self, ctx: &MessageContext<'_>, args: &[&dyn fmt::Display]) -> String {
        format_full(&self.0, ctx, args)
    }

    /// See [`format_named`].
    pub fn format_named(&self, ctx: &MessageContext<'_>) -> String {
        format_named(&self.0, ctx)
    }

    /// See [`format_positional`].
    pub fn format_positional(&self, args: &[&dyn fmt::Display]) -> String {
        format_positional(&self.0, args)
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Identity;

    fn ctx<'a>(arg: &'a dyn crate::describe::Describe) -> MessageContext<'a> {
        MessageContext::new(Identity::anonymous::<()>(), arg)
    }

    #[test]
    fn test_tag_and_positional() {
        let c = ctx(&17).with_tag("age");
        assert_eq!(format_full("${tag} must be ${0}", &c, &[&"18"]), "age must be 18");
    }

    #[test]
    fn test_all_reserved_names() {
        let c = ctx(&"abc").with_tag("name").with_object(&3usize);
        assert_eq!(
            format_named("${test}|${arg}|${type}|${tag}|${obj}", &c),
            "()|abc|str|name|3"
        );
    }

    #[test]
    fn test_unresolved_tokens_are_kept() {
        let c = ctx(&1);
        assert_eq!(format_named("${bogus}", &c), "${bogus}");
        assert_eq!(format_named("${obj}", &c), "${obj}");
        assert_eq!(format_full("${3}", &c, &[&1]), "${3}");
        assert_eq!(format_full("${-1} ${+1} ${}", &c, &[&1, &2]), "${-1} ${+1} ${}");
    }

    #[test]
    fn test_entry_points_resolve_different_tables() {
        let c = ctx(&1).with_tag("n");
        assert_eq!(format_named("${tag} ${0}", &c), "n ${0}");
        assert_eq!(format_positional("${tag} ${0}", &[&"x"]), "${tag} x");
        assert_eq!(format_full("${tag} ${0}", &c, &[&"x"]), "n x");
    }

    #[test]
    fn test_dangling_start_marker() {
        assert_eq!(format_positional("a ${0} b ${1", &[&"x"]), "a x b ${1");
        assert_eq!(format_positional("${", &[]), "${");
        assert_eq!(format_positional("$", &[]), "$");
    }

    #[test]
    fn test_literal_text_and_adjacent_placeholders() {
        assert_eq!(format_positional("no placeholders", &[]), "no placeholders");
        assert_eq!(format_positional("${0}${1}${0}", &[&"a", &"b"]), "aba");
        assert_eq!(format_positional("}{ $ {0} ${0}}", &[&1]), "}{ $ {0} 1}");
    }

    #[test]
    fn test_nested_marker_is_one_unresolved_token() {
        assert_eq!(format_positional("${a${0}", &[&1]), "${a${0}");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(format_positional("été ${0} ünï", &[&"ça"]), "été ça ünï");
    }

    #[test]
    fn test_template_wrapper() {
        let t = Template::new(String::from("${tag}!"));
        let c = ctx(&1).with_tag("x");
        assert_eq!(t.format_named(&c), "x!");
        assert_eq!(t.to_string(), "${tag}!");
        assert!(!Template::new("plain").has_placeholders());
    }
}
