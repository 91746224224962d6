//! CLI interface for DNA Matcher
//!
//! Provides argument parsing, one-shot commands and persistent settings.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ReplOptions};
pub use paths::{config_dir, PersistentConfig};
