// patex-core/src/positioned_text.rs
//! Provides the core data structures for positioned excerpts and utility
//! functions for logging matched corpus text within the `patex-core` library.

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default number of context characters captured on each side of a match.
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

lazy_static! {
    /// A static boolean that is initialized once to determine if raw corpus
    /// text is allowed in debug logs. Historical corpora can carry restricted
    /// material, so snippets are redacted by default.
    static ref TEXT_DEBUG_ALLOWED: bool = {
        std::env::var("PATEX_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A half-open `[start, stop)` range of character offsets into a text buffer.
///
/// Offsets count characters, not bytes, so spans remain meaningful after the
/// reduced text has been re-encoded or wrapped in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    /// True iff `pos` falls inside the half-open range.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.stop
    }

    /// Standard half-open interval intersection test. Empty spans never
    /// overlap anything.
    pub fn overlaps(&self, other: &Span) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.stop && self.stop > other.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

/// Represents a single matched excerpt removed from a text, together with its
/// original position and bounded context.
///
/// A list of these records is the sole artifact threading
/// [`Extractor`](crate::Extractor) output to [`integrate`](crate::integrate)
/// input. Records are created once per regex match and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedText {
    /// The exact substring that matched.
    pub text: String,
    /// Char-offset span of the match in the original text.
    pub span: Span,
    /// Up to [`DEFAULT_CONTEXT_WINDOW`] characters preceding the match.
    #[serde(default)]
    pub text_before: String,
    /// Up to [`DEFAULT_CONTEXT_WINDOW`] characters following the match.
    #[serde(default)]
    pub text_after: String,
}

/// Equality is by `(text, span)` only; the context fields are informational.
impl PartialEq for PositionedText {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.span == other.span
    }
}

impl Eq for PositionedText {}

impl PositionedText {
    /// Builds a record from a match over `chars` (the original text as a char
    /// slice), capturing up to `window` characters of context on each side.
    pub fn from_char_match(chars: &[char], span: Span, window: usize) -> Self {
        let text: String = chars[span.start.min(chars.len())..span.stop.min(chars.len())]
            .iter()
            .collect();
        let text_before = safe_slice(chars, span.start.saturating_sub(window), span.start);
        let text_after = safe_slice(chars, span.stop, span.stop.saturating_add(window));
        Self {
            text,
            span,
            text_before,
            text_after,
        }
    }

    /// A record is empty if it has no text or a zero-length span. Empty
    /// records are filtered out at the end of extraction.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() || self.span.is_empty()
    }

    pub fn overlaps(&self, other: &PositionedText) -> bool {
        self.span.overlaps(&other.span)
    }
}

/// Clamped char-slice: negative-length and out-of-bounds requests collapse to
/// the empty string rather than panicking.
fn safe_slice(chars: &[char], start: usize, end: usize) -> String {
    let start = start.min(chars.len());
    let end = end.max(start).min(chars.len());
    chars[start..end].iter().collect()
}

pub fn redact_snippet(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.chars().count() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.chars().count())
    }
}

fn get_loggable_content(snippet: &str) -> String {
    if *TEXT_DEBUG_ALLOWED {
        snippet.to_string()
    } else {
        redact_snippet(snippet)
    }
}

pub fn log_extracted_match_debug(module_path: &str, pattern: &str, record: &PositionedText) {
    debug!(
        "{} Extracted match: Pattern='{}', Text='{}', Span={}",
        module_path,
        pattern,
        get_loggable_content(&record.text),
        record.span
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_snippet_short_string() {
        assert_eq!(redact_snippet("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_snippet_long_string() {
        assert_eq!(redact_snippet("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_span_overlap_half_open() {
        let a = Span::new(3, 13);
        let b = Span::new(12, 20);
        let c = Span::new(13, 20);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_empty_span_never_overlaps() {
        let empty = Span::new(5, 5);
        let other = Span::new(0, 10);
        assert!(!empty.overlaps(&other));
        assert!(!other.overlaps(&empty));
    }

    #[test]
    fn test_equality_ignores_context() {
        let a = PositionedText {
            text: "abc".into(),
            span: Span::new(0, 3),
            text_before: "".into(),
            text_after: "xyz".into(),
        };
        let b = PositionedText {
            text: "abc".into(),
            span: Span::new(0, 3),
            text_before: "different".into(),
            text_after: "".into(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_char_match_clamps_context() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let record = PositionedText::from_char_match(&chars, Span::new(1, 3), 10);
        assert_eq!(record.text, "bc");
        assert_eq!(record.text_before, "a");
        assert_eq!(record.text_after, "def");
    }
}
