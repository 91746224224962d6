//! Syntax highlighting for REPL input

use colored::Colorize;
use rustyline::highlight::Highlighter;

/// Command words recognised by the parser
pub const COMMANDS: &[&str] = &[
    "add", "compare", "help", "list", "read", "remove", "retrieve", "size", "quit", "exit",
];

/// Command highlighter
pub struct CommandHighlighter {
    commands: Vec<String>,
}

impl CommandHighlighter {
    /// Create a highlighter for the known command words
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn highlight_command(&self, line: &str) -> String {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return line.to_string();
        }

        let cmd = parts[0].to_ascii_lowercase();

        if self.commands.iter().any(|c| c == &cmd) {
            let highlighted_cmd = parts[0].blue().bold().to_string();
            // Keep everything after the command word byte-for-byte
            match line.find(parts[0]) {
                Some(start) => {
                    let rest = &line[start + parts[0].len()..];
                    format!("{}{}{}", &line[..start], highlighted_cmd, rest)
                }
                None => line.to_string(),
            }
        } else {
            line.to_string()
        }
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> std::borrow::Cow<'l, str> {
        std::borrow::Cow::Owned(self.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}
