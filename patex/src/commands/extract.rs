// patex/src/commands/extract.rs
//! Extract command implementation: removes pattern matches from the input
//! text, saves the records file and emits the reduced text.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;

use patex_core::{save_records, Extractor, PatexError};

use crate::cli::ExtractCommand;
use crate::commands::{read_input, write_output};

/// Collects the pattern list from the command line: either the single inline
/// pattern or the line-delimited pattern file.
fn collect_patterns(args: &ExtractCommand) -> Result<Vec<String>> {
    if let Some(pattern) = &args.pattern {
        return Ok(vec![pattern.clone()]);
    }
    if let Some(path) = &args.pattern_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;
        return Ok(contents.lines().map(str::to_string).collect());
    }
    Err(PatexError::InvalidArgument("No pattern or pattern file given.".to_string()).into())
}

pub fn run_extract(args: &ExtractCommand) -> Result<()> {
    info!("Starting extract operation.");

    let patterns = collect_patterns(args)?;
    let extractor = Extractor::from_sources(&patterns).context("Failed to compile patterns")?;

    let text = read_input(args.input_file.as_deref())?;
    let (reduced, records) = extractor.extract(&text);
    debug!(
        "Extracted {} record(s) with {} pattern(s). Text length: {} -> {}.",
        records.len(),
        patterns.len(),
        text.len(),
        reduced.len()
    );

    save_records(&args.records_file, &records).with_context(|| {
        format!(
            "Failed to write records file: {}",
            args.records_file.display()
        )
    })?;

    write_output(args.output.as_ref(), &reduced)?;

    info!("Extract operation completed.");
    Ok(())
}
