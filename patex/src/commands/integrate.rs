// patex/src/commands/integrate.rs
//! Integrate command implementation: re-inserts recorded spans into a
//! marked-up text at their original positions.

use anyhow::{Context, Result};
use log::{debug, info};

use patex_core::{integrate, load_records};

use crate::cli::IntegrateCommand;
use crate::commands::{read_input, write_output};

pub fn run_integrate(args: &IntegrateCommand) -> Result<()> {
    info!("Starting integrate operation.");

    let records = load_records(&args.records_file).with_context(|| {
        format!(
            "Failed to read records file: {}",
            args.records_file.display()
        )
    })?;
    debug!("Loaded {} record(s) for integration.", records.len());

    let marked_text = read_input(args.input_file.as_deref())?;
    let restored = integrate(&marked_text, &records)
        .context("Records do not match the marked text; was it produced from this extraction?")?;

    write_output(args.output.as_ref(), &restored)?;

    info!("Integrate operation completed.");
    Ok(())
}
