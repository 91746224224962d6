//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::ReplState;
use crate::commands::fold_case;
use crate::commands::handlers::{compare, entries, read, retrieve};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an entry: add <s>
    Add {
        /// Entry to add
        entry: String,
    },
    /// Remove an entry: remove <s>
    Remove {
        /// Entry to remove
        entry: String,
    },
    /// Find the closest entries: retrieve <s>
    Retrieve {
        /// Query string
        query: String,
    },
    /// Compare two strings and show the grid: compare <a> <b>
    Compare {
        /// First string (grid rows)
        a: String,
        /// Second string (grid columns)
        b: String,
    },
    /// List entries: list
    List,
    /// Show entry count: size
    Size,
    /// Add every token of a file: read <path>
    Read {
        /// Path to entry file
        path: PathBuf,
    },
    /// Show help: help
    Help,
    /// Exit REPL: quit | exit
    Quit,
}

/// Command result
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Continue REPL
    Continue(String),
    /// Exit REPL
    Exit(String),
}

impl Command {
    /// Parse command from input string
    ///
    /// The command word and string arguments are folded to lowercase. The
    /// `read` path keeps its case.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = fold_case(parts[0]);
        let args = &parts[1..];

        match cmd.as_str() {
            "add" => Self::expect_args(args, 1, "add <string>")
                .map(|a| Self::Add { entry: fold_case(a[0]) }),
            "remove" => Self::expect_args(args, 1, "remove <string>")
                .map(|a| Self::Remove { entry: fold_case(a[0]) }),
            "retrieve" => Self::expect_args(args, 1, "retrieve <string>")
                .map(|a| Self::Retrieve { query: fold_case(a[0]) }),
            "compare" => Self::expect_args(args, 2, "compare <string> <string>").map(|a| {
                Self::Compare {
                    a: fold_case(a[0]),
                    b: fold_case(a[1]),
                }
            }),
            "read" => Self::expect_args(args, 1, "read <path>").map(|a| Self::Read {
                path: PathBuf::from(a[0]),
            }),
            "list" => Self::expect_args(args, 0, "list").map(|_| Self::List),
            "size" => Self::expect_args(args, 0, "size").map(|_| Self::Size),
            "help" => Self::expect_args(args, 0, "help").map(|_| Self::Help),
            "quit" | "exit" => Self::expect_args(args, 0, "quit").map(|_| Self::Quit),
            _ => Err(anyhow::anyhow!(
                "Please enter a valid command ('{}' is unknown). Type 'help' for available commands.",
                cmd
            )),
        }
    }

    fn expect_args<'a, 'b>(args: &'a [&'b str], count: usize, usage: &str) -> Result<&'a [&'b str]> {
        if args.len() == count {
            Ok(args)
        } else {
            Err(anyhow::anyhow!(
                "Please enter a valid command. Usage: {}",
                usage
            ))
        }
    }

    /// Execute command
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult> {
        debug!(command = ?self, "executing command");

        match self {
            Self::Add { entry } => Ok(CommandResult::Continue(entries::add_entry(
                &mut state.collection,
                entry,
            ))),

            Self::Remove { entry } => Ok(CommandResult::Continue(entries::remove_entry(
                &mut state.collection,
                entry,
            ))),

            Self::Retrieve { query } => Ok(CommandResult::Continue(retrieve::retrieve(
                &state.matcher,
                &state.collection,
                query,
            ))),

            Self::Compare { a, b } => Ok(CommandResult::Continue(compare::compare(a, b))),

            Self::List => Ok(CommandResult::Continue(entries::format_list(
                &state.collection,
            ))),

            Self::Size => Ok(CommandResult::Continue(entries::format_size(
                &state.collection,
            ))),

            Self::Read { path } => {
                let report = read::load_file(&mut state.collection, path, state.max_input_len)?;

                let mut output = report.messages.join("\n");
                if !output.is_empty() {
                    output.push('\n');
                }
                output.push_str(&format!(
                    "Read {} token(s) from {}: {} added, {} already present, {} rejected",
                    report.total().to_string().yellow(),
                    path.display().to_string().cyan(),
                    report.inserted.to_string().green().bold(),
                    report.duplicates.to_string().yellow(),
                    (report.rejected_full + report.skipped_too_long)
                        .to_string()
                        .red()
                ));
                Ok(CommandResult::Continue(output))
            }

            Self::Help => Ok(CommandResult::Continue(Self::general_help())),

            Self::Quit => {
                let released = state.release();
                debug!(released, "collection released on quit");
                Ok(CommandResult::Exit("Exiting program".to_string()))
            }
        }
    }

    fn general_help() -> String {
        format!(
            r#"{}
  add      <s>        add to database
  compare  <a> <b>    compare two strings
  help                print this text
  list                print database
  read     <path>     read from file and add to database
  remove   <s>        remove from database
  retrieve <s>        find in database
  size                print number of items in database
  quit                stop"#,
            "LIST OF COMMANDS...".bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folds_case() {
        assert_eq!(
            Command::parse("ADD GatTaca").unwrap(),
            Command::Add {
                entry: "gattaca".to_string()
            }
        );
    }

    #[test]
    fn test_parse_read_keeps_path_case() {
        assert_eq!(
            Command::parse("READ /tmp/Entries.TXT").unwrap(),
            Command::Read {
                path: PathBuf::from("/tmp/Entries.TXT")
            }
        );
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("add a b").is_err());
        assert!(Command::parse("compare a").is_err());
        assert!(Command::parse("list all").is_err());
        assert!(Command::parse("quit now").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = Command::parse("frobnicate x").unwrap_err();
        assert!(err.to_string().contains("valid command"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(Command::parse("   ").is_err());
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }
}
