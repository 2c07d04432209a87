// patex/src/lib.rs
//! # Patex CLI Application
//!
//! This crate provides the command-line interface over `patex-core`:
//! `extract` removes pattern matches from a text into a records file,
//! `integrate` re-inserts them into a marked-up derivative, and `enumerate`
//! lists a records file's contents.

pub mod cli;
pub mod commands;
pub mod logger;
