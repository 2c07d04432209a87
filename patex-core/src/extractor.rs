// patex-core/src/extractor.rs
//! The extraction half of the core: scans a text buffer against a compiled
//! pattern set, records every match with its original position and context,
//! and produces the text with all matched spans deleted.

use log::debug;

use crate::errors::PatexError;
use crate::patterns::{compile_patterns, CompiledPatterns, PatternSource};
use crate::positioned_text::{
    log_extracted_match_debug, PositionedText, Span, DEFAULT_CONTEXT_WINDOW,
};

/// A mapper to convert the regex engine's byte offsets into char offsets.
///
/// Record spans count characters so that the integrator can walk a char
/// stream interleaved with markup; `regex` reports byte positions.
#[derive(Debug)]
struct CharOffsetMap {
    map: Vec<usize>,
}

impl CharOffsetMap {
    fn new(text: &str) -> Self {
        let mut map = vec![0usize; text.len() + 1];
        let mut char_count = 0;
        for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
            for b in byte_idx..byte_idx + ch.len_utf8() {
                map[b] = char_idx;
            }
            char_count = char_idx + 1;
        }
        map[text.len()] = char_count;
        Self { map }
    }

    /// Maps a byte offset (which must lie on a char boundary, as all regex
    /// match boundaries do) to the corresponding char offset.
    fn char_index(&self, byte_index: usize) -> usize {
        let idx = byte_index.min(self.map.len().saturating_sub(1));
        self.map[idx]
    }
}

/// Removes pattern matches from texts while remembering where they were.
///
/// The pattern set is compiled once at construction; [`Extractor::extract`]
/// itself is infallible and may be called repeatedly (and concurrently) for
/// any number of documents.
#[derive(Debug, Clone)]
pub struct Extractor {
    patterns: CompiledPatterns,
    window: usize,
}

impl Extractor {
    pub fn new(patterns: CompiledPatterns) -> Self {
        Self {
            patterns,
            window: DEFAULT_CONTEXT_WINDOW,
        }
    }

    /// Compiles `sources` and builds an extractor in one step.
    pub fn from_sources<I, P>(sources: I) -> Result<Self, PatexError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PatternSource>,
    {
        Ok(Self::new(compile_patterns(sources)?))
    }

    /// Overrides the context-window length captured around each match.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Removes all pattern matches from `text`.
    ///
    /// Returns the reduced text together with one [`PositionedText`] record
    /// per match, ordered pattern-major (all matches of the first pattern in
    /// text order, then the second pattern, and so on). If matches of
    /// different patterns overlap, every record is retained and the deleted
    /// region is the union of their spans.
    pub fn extract(&self, text: &str) -> (String, Vec<PositionedText>) {
        let chars: Vec<char> = text.chars().collect();
        let offsets = CharOffsetMap::new(text);

        let mut records = Vec::new();
        for pattern in &self.patterns.patterns {
            for m in pattern.find_iter(text) {
                let span = Span::new(offsets.char_index(m.start()), offsets.char_index(m.end()));
                let record = PositionedText::from_char_match(&chars, span, self.window);
                // Zero-width matches carry no removable text.
                if record.is_empty() {
                    continue;
                }
                log_extracted_match_debug(module_path!(), pattern.as_str(), &record);
                records.push(record);
            }
        }

        let spans: Vec<Span> = records.iter().map(|r| r.span).collect();
        let new_text = remove_spans(&chars, &spans);
        debug!(
            "Extraction complete: {} record(s), text length {} -> {}.",
            records.len(),
            chars.len(),
            new_text.chars().count()
        );
        (new_text, records)
    }
}

/// One-shot convenience: compiles `sources` and extracts from `text` in a
/// single call.
pub fn extract<I, P>(text: &str, sources: I) -> Result<(String, Vec<PositionedText>), PatexError>
where
    I: IntoIterator<Item = P>,
    P: Into<PatternSource>,
{
    Ok(Extractor::from_sources(sources)?.extract(text))
}

/// Deletes every character whose index lies inside any of `spans`.
///
/// The spans are sorted and merged into disjoint intervals first, so the
/// rebuild is a single forward walk over the merged set rather than a
/// per-character membership scan.
fn remove_spans(chars: &[char], spans: &[Span]) -> String {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    let mut sorted: Vec<Span> = spans.iter().copied().filter(|s| !s.is_empty()).collect();
    sorted.sort_by_key(|s| (s.start, s.stop));
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start <= last.stop => {
                last.stop = last.stop.max(span.stop);
            }
            _ => merged.push(span),
        }
    }

    let mut result = String::with_capacity(chars.len());
    let mut cursor = 0;
    for span in &merged {
        let gap_end = span.start.min(chars.len());
        result.extend(&chars[cursor..gap_end]);
        cursor = span.stop.min(chars.len()).max(cursor);
    }
    result.extend(&chars[cursor..]);
    result
}
