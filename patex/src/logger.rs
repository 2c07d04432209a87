// patex/src/logger.rs
//! Logger initialization for the patex CLI.

use log::LevelFilter;

/// Initializes the global logger.
///
/// With `Some(level)`, the given filter overrides `RUST_LOG` for the patex
/// crates; with `None`, `RUST_LOG` applies unchanged. Safe to call more than
/// once (later calls are no-ops), which keeps tests simple.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_module("patex", level);
        builder.filter_module("patex_core", level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
