// patex-core/src/lib.rs
//! # Patex Core Library
//!
//! `patex-core` provides the fundamental, platform-independent logic for
//! removing regex-matched spans from a text and later re-inserting them into
//! a marked-up (e.g. XML-annotated) version of that text. It is the core of a
//! corpus-annotation pipeline: temporal expressions and similar spans are
//! extracted before automatic tagging so the tagger never sees them, then
//! integrated back into the tagged output at their original positions.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of in-memory strings and record lists, without concerns for
//! I/O beyond the records hand-off helpers.
//!
//! ## Modules
//!
//! * `patterns`: Compiles pattern sources (strings or `regex::Regex`) into a `CompiledPatterns` set.
//! * `positioned_text`: Defines `Span` and the `PositionedText` record threading the two stages.
//! * `extractor`: Finds all pattern matches and deletes their spans from the text.
//! * `integrator`: Walks marked text and re-inserts records, skipping markup characters.
//! * `records`: JSON persistence of record lists for the on-disk hand-off.
//! * `errors`: The `PatexError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use patex_core::{integrate, Extractor, PatexError};
//!
//! fn main() -> Result<(), PatexError> {
//!     let extractor = Extractor::from_sources(["_pattern[0-9]_"])?;
//!
//!     // 1. Remove the spans the downstream tagger must not see.
//!     let (reduced, records) = extractor.extract("abc_pattern1_defg(hij_pattern2_klmn)");
//!     assert_eq!(reduced, "abcdefg(hijklmn)");
//!
//!     // 2. Tag the reduced text elsewhere, then put the spans back. The
//!     //    markup does not consume text positions.
//!     let tagged = "<doc>abcdefg(hijklmn)</doc>";
//!     let restored = integrate(tagged, &records)?;
//!     assert_eq!(restored, "<doc>abc_pattern1_defg(hij_pattern2_klmn)</doc>");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Both operations are deterministic pure functions; any failure indicates a
//! programming or usage error, never a transient condition. The integrator in
//! particular is only a correct inverse when its inputs are a matched
//! extraction pair, and reports violations as
//! [`PatexError::IntegrationConsistency`] with expected-vs-actual cursor
//! positions.

pub mod errors;
pub mod extractor;
pub mod integrator;
pub mod patterns;
pub mod positioned_text;
pub mod records;

/// Re-exports the custom error type for clear error reporting.
pub use errors::PatexError;

/// Re-exports the extraction entry points.
pub use extractor::{extract, Extractor};

/// Re-exports the integration entry point.
pub use integrator::integrate;

/// Re-exports pattern compilation types and functions.
pub use patterns::{compile_patterns, CompiledPatterns, PatternSource, MAX_PATTERN_LENGTH};

/// Re-exports the core record types.
pub use positioned_text::{redact_snippet, PositionedText, Span, DEFAULT_CONTEXT_WINDOW};

/// Re-exports the records-file hand-off helpers.
pub use records::{load_records, read_records, save_records, write_records};
