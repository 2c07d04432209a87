// patex/src/commands/enumerate.rs
//! Enumerate command implementation: lists the matched text of every record
//! in a records file, one per line.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};

use patex_core::load_records;

use crate::cli::EnumerateCommand;

pub fn run_enumerate(args: &EnumerateCommand) -> Result<()> {
    info!("Starting enumerate operation.");

    let records = load_records(&args.records_file).with_context(|| {
        format!(
            "Failed to read records file: {}",
            args.records_file.display()
        )
    })?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for record in &records {
        writeln!(writer, "{}", record.text)?;
    }

    info!("Enumerate operation completed.");
    Ok(())
}
