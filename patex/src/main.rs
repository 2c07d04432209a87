// patex/src/main.rs
//! Patex entry point: parses the CLI, configures logging and dispatches to
//! the requested subcommand.

use anyhow::Result;
use clap::Parser;
use log::info;

use patex::cli::{Cli, Commands};
use patex::commands::{enumerate, extract, integrate};
use patex::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("patex started. Version: {}", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Commands::Extract(cmd) => extract::run_extract(cmd),
        Commands::Integrate(cmd) => integrate::run_integrate(cmd),
        Commands::Enumerate(cmd) => enumerate::run_enumerate(cmd),
    }
}
