//! Rustyline helper integration
//!
//! Provides completion, hinting, highlighting, and validation for the REPL.

use super::highlighter::{CommandHighlighter, COMMANDS};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper
pub struct MatcherHelper {
    highlighter: CommandHighlighter,
    hinter: HistoryHinter,
    files: FilenameCompleter,
    commands: Vec<String>,
}

impl MatcherHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            highlighter: CommandHighlighter::new(),
            hinter: HistoryHinter::new(),
            files: FilenameCompleter::new(),
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn command_candidates(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}

impl Default for MatcherHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for MatcherHelper {}

impl Completer for MatcherHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let before = &line[..pos];
        let parts: Vec<&str> = before.split_whitespace().collect();

        if parts.is_empty() {
            return Ok((0, self.command_candidates("")));
        }

        // Still typing the command word
        if parts.len() == 1 && !before.ends_with(char::is_whitespace) {
            let start = before.len() - parts[0].len();
            return Ok((start, self.command_candidates(&parts[0].to_ascii_lowercase())));
        }

        match parts[0].to_ascii_lowercase().as_str() {
            "read" => self.files.complete(line, pos, ctx),
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for MatcherHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for MatcherHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

impl Validator for MatcherHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Validation happens when the command is parsed
        Ok(ValidationResult::Valid(None))
    }
}
