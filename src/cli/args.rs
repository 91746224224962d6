//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dnamatch")]
#[command(about = "DNA Matcher - approximate string matching with Levenshtein distance")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to the interactive REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by the REPL and one-shot retrieval
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Maximum number of entries in the collection
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Number of closest matches reported by retrieve
    #[arg(short = 'k', long)]
    pub matches: Option<usize>,

    /// Longest accepted input line or entry, in characters
    #[arg(long)]
    pub max_input: Option<usize>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch interactive REPL
    Repl {
        /// Collection and matcher settings for the session
        #[command(flatten)]
        options: ReplOptions,

        /// Entry file to read before the first prompt
        #[arg(short, long)]
        preload: Option<PathBuf>,
    },

    /// Compare two strings and print the distance grid
    Compare {
        /// First string (grid rows)
        a: String,

        /// Second string (grid columns)
        b: String,
    },

    /// Find the entries of a file closest to a query
    Retrieve {
        /// Query string
        query: String,

        /// Entry file (whitespace-separated tokens)
        #[arg(short, long)]
        dict: PathBuf,

        /// Collection and matcher settings for this lookup
        #[command(flatten)]
        options: ReplOptions,
    },

    /// Show or update stored settings
    Settings {
        /// Set default collection capacity
        #[arg(long)]
        set_capacity: Option<usize>,

        /// Set default number of matches
        #[arg(long)]
        set_matches: Option<usize>,

        /// Set default input length limit
        #[arg(long)]
        set_max_input: Option<usize>,

        /// Set entry file read at REPL start-up
        #[arg(long)]
        set_preload: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
