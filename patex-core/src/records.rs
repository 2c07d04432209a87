// patex-core/src/records.rs
//! Serialized hand-off of extraction records between pipeline stages.
//!
//! The extract and integrate stages of the annotation pipeline run as
//! separate invocations, so the `Vec<PositionedText>` produced by extraction
//! is persisted to disk in between. The format is plain JSON: per record it
//! preserves `text`, the span's `start`/`stop`, `text_before` and
//! `text_after`, and nothing else is needed to interpret it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::errors::PatexError;
use crate::positioned_text::PositionedText;

/// Writes `records` as JSON to `writer`.
pub fn write_records<W: Write>(writer: W, records: &[PositionedText]) -> Result<(), PatexError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Reads a record list from JSON in `reader`.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PositionedText>, PatexError> {
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Persists `records` to the file at `path`, creating or truncating it.
pub fn save_records(path: &Path, records: &[PositionedText]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create records file: {}", path.display()))?;
    write_records(BufWriter::new(file), records)
        .with_context(|| format!("Failed to write records to {}", path.display()))?;
    debug!("Saved {} record(s) to {}.", records.len(), path.display());
    Ok(())
}

/// Loads a record list previously written by [`save_records`].
pub fn load_records(path: &Path) -> Result<Vec<PositionedText>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open records file: {}", path.display()))?;
    let records = read_records(BufReader::new(file))
        .with_context(|| format!("Failed to parse records from {}", path.display()))?;
    debug!("Loaded {} record(s) from {}.", records.len(), path.display());
    Ok(records)
}
