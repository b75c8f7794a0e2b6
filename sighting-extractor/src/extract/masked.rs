//! Normalized text with spans withdrawn from further matching.

use std::ops::Range;

use super::normalize::token_matches;

/// Normalized text plus the byte ranges earlier finders have consumed.
///
/// Masking never edits the text; it returns a new value with one more
/// range, so each finder is a pure transform over its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    text: String,
    masked: Vec<Range<usize>>,
}

impl MaskedText {
    /// Wrap already-normalized text with nothing masked.
    pub fn new(normalized: impl Into<String>) -> Self {
        Self {
            text: normalized.into(),
            masked: Vec::new(),
        }
    }

    /// The full normalized text, masked spans included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn masked(&self) -> &[Range<usize>] {
        &self.masked
    }

    /// A copy of this value with `range` masked as well.
    ///
    /// The range is clamped to the text and widened outward to the
    /// nearest char boundaries.
    pub fn mask(&self, range: Range<usize>) -> MaskedText {
        let mut masked = self.masked.clone();
        let mut end = range.end.min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        let mut start = range.start.min(end);
        while !self.text.is_char_boundary(start) {
            start -= 1;
        }
        masked.push(start..end);
        masked.sort_by_key(|r| r.start);
        MaskedText {
            text: self.text.clone(),
            masked,
        }
    }

    /// Whether `range` overlaps any masked span.
    pub fn is_masked(&self, range: &Range<usize>) -> bool {
        self.masked
            .iter()
            .any(|m| m.start < range.end && range.start < m.end)
    }

    /// Token-bounded occurrences of `needle` outside masked spans.
    pub fn find_token_matches<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
        token_matches(&self.text, needle).filter(move |&start| !self.is_masked(&(start..start + needle.len())))
    }

    /// Whether `needle` sits on token boundaries at `start` and is unmasked.
    pub fn matches_at(&self, start: usize, needle: &str) -> bool {
        !needle.is_empty()
            && self.text.get(start..).is_some_and(|rest| rest.starts_with(needle))
            && super::normalize::is_token_match(&self.text, start, needle.len())
            && !self.is_masked(&(start..start + needle.len()))
    }

    /// The text with masked spans cut out and whitespace re-collapsed.
    pub fn residual(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for range in &self.masked {
            if range.start > cursor {
                out.push_str(&self.text[cursor..range.start]);
            }
            cursor = cursor.max(range.end);
        }
        if cursor < self.text.len() {
            out.push_str(&self.text[cursor..]);
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
