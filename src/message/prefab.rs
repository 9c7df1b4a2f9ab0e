//! Default messages for the built-in checks
//!
//! Each built-in check in [`checks`](crate::checks) has an entry here: a pure
//! function from a [`MessageContext`] to an English sentence. Every entry reads
//! correctly both ways round, e.g. "x must be even" and "x must not be even".
//! Values are always rendered through the context's summarizer.
//!
//! Entries that need a length from the object or argument (index bounds,
//! length comparisons) branch on the value's runtime shape, and return a
//! [`CorruptError`] rather than a wrong sentence when the shape has no length.
//!
//! # Example
//!
//! ```rust
//! use plumbline::message::{prefab, Identity, MessageContext};
//!
//! let even = prefab::lookup("even()").unwrap();
//! let ctx = MessageContext::new(Identity::named("even()", even), &7).with_tag("count");
//! assert_eq!(ctx.default_message().unwrap(), "count must be even (was 7)");
//!
//! let ctx = ctx.negated(true);
//! assert_eq!(ctx.default_message().unwrap(), "count must not be even (was 7)");
//! ```

use crate::describe::{Describe, View};
use crate::error::CorruptError;

use super::{MessageContext, Prefab};

/// The catalog: check name to message generator.
pub static CATALOG: &[(&str, Prefab)] = &[
    ("none()", none),
    ("some()", some),
    ("empty()", empty),
    ("not_empty()", not_empty),
    ("blank()", blank),
    ("even()", even),
    ("odd()", odd),
    ("positive()", positive),
    ("negative()", negative),
    ("zero()", zero),
    ("eq()", eq),
    ("ne()", ne),
    ("gt()", gt),
    ("gte()", gte),
    ("lt()", lt),
    ("lte()", lte),
    ("contains()", contains),
    ("contained_in()", contained_in),
    ("starts_with()", starts_with),
    ("ends_with()", ends_with),
    ("has_substr()", has_substr),
    ("substr_of()", substr_of),
    ("equals_ignore_case()", equals_ignore_case),
    ("eq_int()", eq),
    ("ne_int()", ne),
    ("gt_int()", gt),
    ("gte_int()", gte),
    ("lt_int()", lt),
    ("lte_int()", lte),
    ("multiple_of()", multiple_of),
    ("index_of()", index_of),
    ("to_index_of()", to_index_of),
    ("len_eq()", len_eq),
    ("len_gt()", len_gt),
    ("len_gte()", len_gte),
    ("len_lt()", len_lt),
    ("len_lte()", len_lte),
];

/// Find the message generator registered under `name`.
pub fn lookup(name: &str) -> Option<Prefab> {
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, prefab)| *prefab)
}

fn must(ctx: &MessageContext<'_>) -> &'static str {
    if ctx.is_negated() {
        "must not"
    } else {
        "must"
    }
}

fn object(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    ctx.object_phrase().ok_or_else(|| {
        CorruptError::new(
            ctx.check_name().to_owned(),
            "relation message requested without an object",
        )
    })
}

// "<tag> must [not] <phrase> (was <arg>)"
fn property(ctx: &MessageContext<'_>, phrase: &str) -> Result<String, CorruptError> {
    Ok(format!(
        "{} {} {} (was {})",
        ctx.tag(),
        must(ctx),
        phrase,
        ctx.arg_string()
    ))
}

// "<tag> must [not] <phrase> <obj> (was <arg>)"
fn related(ctx: &MessageContext<'_>, phrase: &str) -> Result<String, CorruptError> {
    Ok(format!(
        "{} {} {} {} (was {})",
        ctx.tag(),
        must(ctx),
        phrase,
        object(ctx)?,
        ctx.arg_string()
    ))
}

// "<tag> must be <op> <obj> (was <arg>)", with the operator flipped on negation
fn compared(ctx: &MessageContext<'_>, op: &str, flipped: &str) -> Result<String, CorruptError> {
    Ok(format!(
        "{} must be {} {} (was {})",
        ctx.tag(),
        if ctx.is_negated() { flipped } else { op },
        object(ctx)?,
        ctx.arg_string()
    ))
}

pub(crate) fn none(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    if ctx.is_negated() {
        Ok(format!("{} must not be None", ctx.tag()))
    } else {
        property(ctx, "be None")
    }
}

pub(crate) fn some(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    none(&ctx.flipped())
}

pub(crate) fn empty(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    if ctx.is_negated() {
        Ok(format!("{} must not be empty", ctx.tag()))
    } else {
        property(ctx, "be empty")
    }
}

pub(crate) fn not_empty(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    empty(&ctx.flipped())
}

pub(crate) fn blank(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    if ctx.is_negated() {
        Ok(format!("{} must not be blank", ctx.tag()))
    } else {
        property(ctx, "be blank")
    }
}

pub(crate) fn even(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    property(ctx, "be even")
}

pub(crate) fn odd(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    property(ctx, "be odd")
}

pub(crate) fn positive(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    property(ctx, "be positive")
}

pub(crate) fn negative(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    property(ctx, "be negative")
}

pub(crate) fn zero(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    property(ctx, "be zero")
}

pub(crate) fn eq(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    if ctx.is_negated() {
        Ok(format!("{} must not be equal to {}", ctx.tag(), object(ctx)?))
    } else {
        related(ctx, "be equal to")
    }
}

pub(crate) fn ne(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    eq(&ctx.flipped())
}

pub(crate) fn gt(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    compared(ctx, ">", "<=")
}

pub(crate) fn gte(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    compared(ctx, ">=", "<")
}

pub(crate) fn lt(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    compared(ctx, "<", ">=")
}

pub(crate) fn lte(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    compared(ctx, "<=", ">")
}

pub(crate) fn contains(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "contain")
}

pub(crate) fn contained_in(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "be an element of")
}

pub(crate) fn starts_with(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "start with")
}

pub(crate) fn ends_with(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "end with")
}

pub(crate) fn has_substr(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "contain")
}

pub(crate) fn substr_of(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "be a substring of")
}

pub(crate) fn equals_ignore_case(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "be equal (ignoring case) to")
}

pub(crate) fn multiple_of(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    related(ctx, "be a multiple of")
}

fn index_bound(ctx: &MessageContext<'_>) -> Result<usize, CorruptError> {
    let object = ctx.object().ok_or_else(|| {
        CorruptError::new(
            ctx.check_name().to_owned(),
            "index bound requested without an object",
        )
    })?;
    match object.view() {
        View::Text(text) => Ok(text.len()),
        View::Sequence { len, .. } => Ok(len),
        _ => Err(CorruptError::new(
            ctx.check_name().to_owned(),
            format!("cannot take an index bound from {}", object.type_name()),
        )),
    }
}

pub(crate) fn index_of(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    let bound = index_bound(ctx)?;
    let range = if ctx.is_negated() {
        format!("< 0 or >= {bound}")
    } else {
        format!(">= 0 and < {bound}")
    };
    Ok(format!("{} must be {} (was {})", ctx.tag(), range, ctx.arg_string()))
}

pub(crate) fn to_index_of(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    let bound = index_bound(ctx)?;
    let range = if ctx.is_negated() {
        format!("< 0 or > {bound}")
    } else {
        format!(">= 0 and <= {bound}")
    };
    Ok(format!("{} must be {} (was {})", ctx.tag(), range, ctx.arg_string()))
}

fn length_of(ctx: &MessageContext<'_>, value: &dyn Describe) -> Result<usize, CorruptError> {
    match value.view() {
        View::Text(text) => Ok(text.len()),
        View::Sequence { len, .. } | View::Map { len, .. } => Ok(len),
        _ => Err(CorruptError::new(
            ctx.check_name().to_owned(),
            format!("{} has no length", value.type_name()),
        )),
    }
}

// "<tag> length must be <op> <obj> (was <len>)"
fn length_compared(
    ctx: &MessageContext<'_>,
    op: &str,
    flipped: &str,
) -> Result<String, CorruptError> {
    let len = length_of(ctx, ctx.arg())?;
    Ok(format!(
        "{} length must be {} {} (was {})",
        ctx.tag(),
        if ctx.is_negated() { flipped } else { op },
        object(ctx)?,
        len
    ))
}

pub(crate) fn len_eq(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    length_compared(ctx, "==", "!=")
}

pub(crate) fn len_gt(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    length_compared(ctx, ">", "<=")
}

pub(crate) fn len_gte(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    length_compared(ctx, ">=", "<")
}

pub(crate) fn len_lt(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    length_compared(ctx, "<", ">=")
}

pub(crate) fn len_lte(ctx: &MessageContext<'_>) -> Result<String, CorruptError> {
    length_compared(ctx, "<=", ">")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Identity;
    use crate::quantifier::Quantifier;
    use std::collections::HashMap;

    fn named<'a>(name: &'static str, arg: &'a dyn Describe) -> MessageContext<'a> {
        let prefab = lookup(name).expect("registered prefab");
        MessageContext::new(Identity::named(name, prefab), arg)
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, (name, _)) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate entry {name}"
            );
        }
    }

    #[test]
    fn test_every_entry_flips_on_negation() {
        let text = "abc";
        for &(name, prefab) in CATALOG {
            let ctx = MessageContext::new(Identity::named(name, prefab), &2)
                .with_tag("x")
                .with_object(&text);
            let ctx = if name.starts_with("len_") {
                MessageContext::new(Identity::named(name, prefab), &text)
                    .with_tag("x")
                    .with_object(&2)
            } else {
                ctx
            };
            let plain = prefab(&ctx).unwrap();
            let negated = prefab(&ctx.negated(true)).unwrap();
            assert_ne!(plain, negated, "{name} does not flip");
            assert!(plain.starts_with("x "), "{name}: {plain}");
        }
    }

    #[test]
    fn test_none_and_some() {
        let value: Option<i32> = Some(3);
        assert_eq!(
            named("none()", &value).with_tag("v").default_message().unwrap(),
            "v must be None (was 3)"
        );
        assert_eq!(
            named("some()", &value).with_tag("v").default_message().unwrap(),
            "v must not be None"
        );
        assert_eq!(
            named("some()", &value).negated(true).default_message().unwrap(),
            "argument must be None (was 3)"
        );
    }

    #[test]
    fn test_comparison_operators_flip() {
        let ctx = named("gte()", &3).with_tag("n").with_object(&5);
        assert_eq!(ctx.default_message().unwrap(), "n must be >= 5 (was 3)");
        let ctx = ctx.negated(true);
        assert_eq!(ctx.default_message().unwrap(), "n must be < 5 (was 3)");
    }

    #[test]
    fn test_quantified_object() {
        let candidates = vec![1, 2, 3];
        let ctx = named("eq()", &7)
            .with_tag("n")
            .with_object(&candidates)
            .with_quantifier(Quantifier::Any);
        assert_eq!(
            ctx.default_message().unwrap(),
            "n must be equal to any of [1, 2, 3] (was 7)"
        );
    }

    #[test]
    fn test_index_bound_by_shape() {
        let text = "hello";
        let list = vec![1, 2, 3];
        let array = [0u8; 4];

        let msg = |obj: &dyn Describe| {
            named("index_of()", &9)
                .with_tag("i")
                .with_object(obj)
                .default_message()
        };
        assert_eq!(msg(&text).unwrap(), "i must be >= 0 and < 5 (was 9)");
        assert_eq!(msg(&list).unwrap(), "i must be >= 0 and < 3 (was 9)");
        assert_eq!(msg(&array).unwrap(), "i must be >= 0 and < 4 (was 9)");
    }

    #[test]
    fn test_index_bound_on_unsupported_shape_is_corrupt() {
        let mut map = HashMap::new();
        map.insert(1, 2);
        let err = named("index_of()", &0)
            .with_object(&map)
            .default_message()
            .unwrap_err();
        assert_eq!(err.check, "index_of()");

        let err = named("to_index_of()", &0)
            .with_object(&3.5)
            .default_message()
            .unwrap_err();
        assert!(err.detail.contains("f64"));
    }

    #[test]
    fn test_relation_without_object_is_corrupt() {
        assert!(named("gt()", &1).default_message().is_err());
    }

    #[test]
    fn test_length_messages() {
        let list = vec!['a', 'b'];
        let ctx = named("len_gte()", &list).with_tag("letters").with_object(&3);
        assert_eq!(
            ctx.default_message().unwrap(),
            "letters length must be >= 3 (was 2)"
        );
        assert!(named("len_eq()", &true).with_object(&1).default_message().is_err());
    }
}
