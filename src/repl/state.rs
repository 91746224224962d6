//! REPL state management
//!
//! Owns the collection and the matcher settings for one session.

use crate::collection::{Collection, DEFAULT_CAPACITY};
use crate::commands::handlers::read::load_file;
use crate::commands::LoadReport;
use crate::matcher::{Matcher, DEFAULT_MATCH_COUNT};
use anyhow::Result;
use std::path::Path;

/// Longest accepted input line or file token, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 99;

/// REPL state
#[derive(Debug, Clone)]
pub struct ReplState {
    /// Entries of this session
    pub collection: Collection,
    /// Closest-entry search settings
    pub matcher: Matcher,
    /// Longest accepted input line or file token
    pub max_input_len: usize,
}

impl ReplState {
    /// Create a new REPL state with default settings
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_CAPACITY, DEFAULT_MATCH_COUNT, DEFAULT_MAX_INPUT_LEN)
    }

    /// Create a new REPL state with explicit settings
    pub fn with_settings(capacity: usize, match_count: usize, max_input_len: usize) -> Self {
        Self {
            collection: Collection::with_capacity(capacity),
            matcher: Matcher::new(match_count),
            max_input_len,
        }
    }

    /// Add every token of an entry file
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadReport> {
        load_file(&mut self.collection, path, self.max_input_len)
    }

    /// Release every entry. Returns how many were dropped.
    pub fn release(&mut self) -> usize {
        self.collection.clear()
    }

    /// Session statistics
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            entries: self.collection.len(),
            capacity: self.collection.capacity(),
            match_count: self.matcher.k(),
            max_input_len: self.max_input_len,
        }
    }
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of stored entries
    pub entries: usize,
    /// Collection capacity
    pub capacity: usize,
    /// Matches reported by retrieve
    pub match_count: usize,
    /// Input length limit
    pub max_input_len: usize,
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Entries:    {}/{}", self.entries, self.capacity)?;
        writeln!(f, "Matches:    {}", self.match_count)?;
        writeln!(f, "Max input:  {}", self.max_input_len)?;
        Ok(())
    }
}
