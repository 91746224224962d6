//! Shared command logic for CLI and REPL
//!
//! Both front-ends read entry files, fold case and print results the same
//! way; that logic lives here so the two stay consistent.

pub mod core;
pub mod handlers;

pub use core::{fold_case, parse_entries, read_entries, LoadReport};
