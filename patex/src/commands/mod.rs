// patex/src/commands/mod.rs
//! Subcommand implementations for the patex CLI.

pub mod enumerate;
pub mod extract;
pub mod integrate;

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Reads the input text from `path`, or from stdin when no path was given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            info!("Reading input from stdin.");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
            Ok(input)
        }
    }
}

/// Writes `content` to `path`, or to stdout when no path was given.
pub fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing output to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", content)?;
        }
    }
    Ok(())
}
