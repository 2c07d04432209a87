//! patterns.rs - Compilation of extraction patterns.
//!
//! This module converts pattern sources (regex source strings or precompiled
//! `regex::Regex` values) into a `CompiledPatterns` set ready for efficient
//! extraction. All compilation failures are collected and reported together.

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::PatexError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A single extraction pattern, either as regex source text or already
/// compiled.
#[derive(Debug, Clone)]
pub enum PatternSource {
    Source(String),
    Compiled(Regex),
}

impl From<&str> for PatternSource {
    fn from(source: &str) -> Self {
        PatternSource::Source(source.to_string())
    }
}

impl From<String> for PatternSource {
    fn from(source: String) -> Self {
        PatternSource::Source(source)
    }
}

impl From<&String> for PatternSource {
    fn from(source: &String) -> Self {
        PatternSource::Source(source.clone())
    }
}

impl From<Regex> for PatternSource {
    fn from(regex: Regex) -> Self {
        PatternSource::Compiled(regex)
    }
}

/// The compiled pattern set applied during one extraction run.
///
/// Pattern order is preserved: extraction records are emitted pattern-major,
/// in the order the patterns were supplied.
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    pub patterns: Vec<Regex>,
}

impl CompiledPatterns {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compiles a list of pattern sources into a `CompiledPatterns` set.
///
/// Already-compiled patterns pass through unchanged. String sources are
/// compiled with default regex semantics (no extra flags) and a compiled-size
/// limit. Every failing source is reported, not just the first.
pub fn compile_patterns<I, P>(sources: I) -> Result<CompiledPatterns, PatexError>
where
    I: IntoIterator<Item = P>,
    P: Into<PatternSource>,
{
    let mut compiled = Vec::new();
    let mut compilation_errors = Vec::new();

    for source in sources {
        match source.into() {
            PatternSource::Compiled(regex) => {
                debug!("Accepting precompiled pattern '{}'.", regex.as_str());
                compiled.push(regex);
            }
            PatternSource::Source(source) => {
                debug!("Attempting to compile pattern '{}'.", source);

                if source.len() > MAX_PATTERN_LENGTH {
                    compilation_errors.push(PatexError::PatternLengthExceeded(
                        source.len(),
                        MAX_PATTERN_LENGTH,
                    ));
                    continue;
                }

                let regex_result = RegexBuilder::new(&source)
                    .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                    .build();

                match regex_result {
                    Ok(regex) => {
                        debug!("Pattern '{}' compiled successfully.", source);
                        compiled.push(regex);
                    }
                    Err(e) => {
                        compilation_errors.push(PatexError::PatternCompilation(source, e));
                    }
                }
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(PatexError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
        Ok(CompiledPatterns { patterns: compiled })
    }
}
