//! Bounded "short string" rendering
//!
//! Failure messages embed the offending value, which can be arbitrarily large.
//! [`Summarizer`] renders any [`Describe`] value within a character budget,
//! showing at most `max_elements` elements per collection level. Collections
//! that were cut short get a `" (+N)"` suffix naming how many elements were
//! left out, and a result still wider than the budget ends in `"..."`.
//! Arrays of arrays are named by type instead, e.g. `u8[3][]`.

use std::fmt::Write as _;

use super::{Describe, SequenceKind, View};

/// Default character budget for rendered values.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Default number of elements shown per collection level.
pub const DEFAULT_MAX_ELEMENTS: usize = 10;

const ELLIPSIS: &str = "...";

/// Renders values as bounded, human-readable strings.
///
/// # Example
///
/// ```rust
/// use plumbline::describe::Summarizer;
///
/// let summarizer = Summarizer::new().with_max_width(40).with_max_elements(3);
/// let values: Vec<u32> = (0..10_000).collect();
///
/// assert_eq!(summarizer.summarize(&values), "[0, 1, 2] (+9997)");
/// assert_eq!(summarizer.summarize(&"short"), "short");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summarizer {
    max_width: usize,
    max_elements: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// A summarizer with the default limits.
    pub const fn new() -> Self {
        Summarizer {
            max_width: DEFAULT_MAX_WIDTH,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Set the character budget.
    pub const fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set how many elements are shown per collection level.
    pub const fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// The character budget.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// The element limit per collection level.
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Render `value` within the configured limits.
    pub fn summarize(&self, value: &dyn Describe) -> String {
        let mut out = String::new();
        self.render(value, &mut out);
        self.clip(out)
    }

    // Rendering stops early once the output is past the budget; the tail would
    // be clipped anyway.
    fn full(&self, out: &str) -> bool {
        out.len() > self.max_width.saturating_mul(4).max(self.max_width + ELLIPSIS.len())
    }

    fn render(&self, value: &dyn Describe, out: &mut String) {
        match value.view() {
            View::Null => out.push_str("None"),
            View::Text(text) => out.push_str(text),
            View::Scalar(scalar) => {
                let _ = write!(out, "{scalar}");
            }
            View::Debug(debug) => {
                let _ = write!(out, "{debug:?}");
            }
            View::Entry(key, val) => {
                out.push('(');
                self.render(key, out);
                out.push_str(", ");
                self.render(val, out);
                out.push(')');
            }
            View::Sequence {
                kind: SequenceKind::NestedArray,
                ..
            } => out.push_str(&value.type_name()),
            View::Sequence { len, items, .. } => {
                out.push('[');
                let mut shown = 0;
                for item in items.take(self.max_elements) {
                    if shown > 0 {
                        out.push_str(", ");
                    }
                    self.render(item, out);
                    shown += 1;
                    if self.full(out) {
                        return;
                    }
                }
                out.push(']');
                self.push_remainder(len, shown, out);
            }
            View::Map { len, entries } => {
                out.push('{');
                let mut shown = 0;
                for (key, val) in entries.take(self.max_elements) {
                    if shown > 0 {
                        out.push_str(", ");
                    }
                    self.render(key, out);
                    out.push_str(": ");
                    self.render(val, out);
                    shown += 1;
                    if self.full(out) {
                        return;
                    }
                }
                out.push('}');
                self.push_remainder(len, shown, out);
            }
        }
    }

    fn push_remainder(&self, len: usize, shown: usize, out: &mut String) {
        if len > shown {
            let _ = write!(out, " (+{})", len - shown);
        }
    }

    fn clip(&self, out: String) -> String {
        if out.chars().count() <= self.max_width {
            return out;
        }
        if self.max_width < ELLIPSIS.len() {
            return out.chars().take(self.max_width).collect();
        }
        let mut clipped: String = out.chars().take(self.max_width - ELLIPSIS.len()).collect();
        clipped.push_str(ELLIPSIS);
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_large_list_is_cut_with_suffix() {
        let values: Vec<i32> = (0..10_000).collect();
        let s = Summarizer::new().with_max_width(40).with_max_elements(3);
        let out = s.summarize(&values);

        assert!(out.starts_with('['));
        assert!(out.ends_with("(+9997)"));
        assert!(out.chars().count() <= 40);
        assert_eq!(out, "[0, 1, 2] (+9997)");
    }

    #[test]
    fn test_wide_text_gets_ellipsis() {
        let s = Summarizer::new().with_max_width(10);
        assert_eq!(s.summarize(&"abcdefghijklmnop"), "abcdefg...");
        assert_eq!(s.summarize(&"abcdefghij"), "abcdefghij");
    }

    #[test]
    fn test_ellipsis_respects_char_boundaries() {
        let s = Summarizer::new().with_max_width(5);
        assert_eq!(s.summarize(&"ééééééé"), "éé...");
    }

    #[test]
    fn test_nested_collections() {
        let nested = vec![vec![1, 2, 3], vec![4]];
        let s = Summarizer::new().with_max_elements(2);
        assert_eq!(s.summarize(&nested), "[[1, 2] (+1), [4]]");
    }

    #[test]
    fn test_maps_and_entries() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        let s = Summarizer::new().with_max_elements(2);
        assert_eq!(s.summarize(&map), "{a: 1, b: 2} (+1)");
        assert_eq!(s.summarize(&("k", 'v')), "(k, v)");
    }

    #[test]
    fn test_nested_arrays_render_as_type_name() {
        let s = Summarizer::new();
        assert_eq!(s.summarize(&[[1u8; 2]; 3]), "u8[3][]");
        assert_eq!(s.summarize(&[[[0i64; 4]; 4]; 4]), "i64[4][][]");
        assert_eq!(s.summarize(&vec![[1, 2], [3, 4]]), "[[1, 2], [3, 4]]");

        let grid: &[[u8; 2]] = &[[0, 0]; 7];
        assert_eq!(s.with_max_width(5).summarize(&grid), "u8...");
    }

    #[test]
    fn test_none_and_tiny_budget() {
        assert_eq!(Summarizer::new().summarize(&None::<i32>), "None");
        assert_eq!(Summarizer::new().with_max_width(2).summarize(&"abcdef"), "ab");
        assert_eq!(Summarizer::new().with_max_width(0).summarize(&"abcdef"), "");
    }
}
