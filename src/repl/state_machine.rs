//! REPL state machine
//!
//! Drives one read-eval-print cycle at a time: a submitted line is parsed
//! into a command, the command is executed by the caller, and the result
//! moves the machine back to `Ready` or on to `Exiting`.

use super::command::{Command, CommandResult};
use colored::Colorize;
use tracing::warn;

/// REPL execution phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplPhase {
    /// Ready to accept new input
    Ready,

    /// Executing a command
    Executing {
        /// The command being executed
        command: Command,
    },

    /// Exiting the REPL
    Exiting,
}

impl ReplPhase {
    /// Check if the phase is terminal (requires exit)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exiting)
    }
}

impl Default for ReplPhase {
    fn default() -> Self {
        Self::Ready
    }
}

/// REPL event
#[derive(Debug, Clone)]
pub enum ReplEvent {
    /// User submitted a line of input
    LineSubmitted {
        /// The input line
        line: String,
    },

    /// Command execution completed
    CommandExecuted {
        /// The execution result
        result: CommandResult,
    },

    /// User interrupted (Ctrl+C)
    Interrupted,

    /// End of input (Ctrl+D or closed stdin)
    Eof,

    /// Command execution failed; the session continues
    ExecutionError {
        /// Error message
        message: String,
    },
}

/// State transition result
#[derive(Debug)]
pub struct Transition {
    /// New phase after transition
    pub new_phase: ReplPhase,
    /// Optional output message
    pub output: Option<String>,
}

impl Transition {
    /// Create a simple transition with no output
    pub fn to(phase: ReplPhase) -> Self {
        Self {
            new_phase: phase,
            output: None,
        }
    }

    /// Create a transition with output
    pub fn to_with_output(phase: ReplPhase, output: String) -> Self {
        Self {
            new_phase: phase,
            output: Some(output),
        }
    }
}

/// State machine for REPL execution
#[derive(Debug)]
pub struct ReplStateMachine {
    phase: ReplPhase,
    max_input_len: usize,
}

impl ReplStateMachine {
    /// Create a new state machine in Ready phase
    pub fn new(max_input_len: usize) -> Self {
        Self {
            phase: ReplPhase::Ready,
            max_input_len,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> &ReplPhase {
        &self.phase
    }

    /// Check if the state machine is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Process an event and transition to a new state
    pub fn process_event(&mut self, event: ReplEvent) -> Transition {
        let transition = match (&self.phase, &event) {
            (ReplPhase::Ready, ReplEvent::LineSubmitted { line }) => {
                if line.trim().is_empty() {
                    Transition::to(ReplPhase::Ready)
                } else if line.len() > self.max_input_len {
                    Transition::to_with_output(
                        ReplPhase::Ready,
                        format!(
                            "{}: input longer than {} characters",
                            "Non valid input".red().bold(),
                            self.max_input_len
                        ),
                    )
                } else {
                    match Command::parse(line) {
                        Ok(command) => Transition::to(ReplPhase::Executing { command }),
                        Err(e) => Transition::to_with_output(ReplPhase::Ready, e.to_string()),
                    }
                }
            }

            (ReplPhase::Ready, ReplEvent::Interrupted) => Transition::to_with_output(
                ReplPhase::Ready,
                "^C (Use 'quit' or Ctrl+D to exit)".yellow().to_string(),
            ),

            (ReplPhase::Ready, ReplEvent::Eof) => {
                Transition::to_with_output(ReplPhase::Exiting, "Exiting program".to_string())
            }

            (ReplPhase::Executing { .. }, ReplEvent::CommandExecuted { result }) => match result {
                CommandResult::Continue(output) => {
                    if output.is_empty() {
                        Transition::to(ReplPhase::Ready)
                    } else {
                        Transition::to_with_output(ReplPhase::Ready, output.clone())
                    }
                }
                CommandResult::Exit(output) => {
                    Transition::to_with_output(ReplPhase::Exiting, output.clone())
                }
            },

            (ReplPhase::Executing { .. }, ReplEvent::ExecutionError { message }) => {
                Transition::to_with_output(
                    ReplPhase::Ready,
                    format!("{}: {}", "Error".red().bold(), message),
                )
            }

            (ReplPhase::Exiting, _) => Transition::to(ReplPhase::Exiting),

            (current, event) => {
                warn!(?event, phase = ?current, "unexpected REPL event");
                Transition::to(ReplPhase::Ready)
            }
        };

        self.phase = transition.new_phase.clone();
        transition
    }
}

impl Default for ReplStateMachine {
    fn default() -> Self {
        Self::new(super::state::DEFAULT_MAX_INPUT_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(sm: &mut ReplStateMachine, line: &str) -> Transition {
        sm.process_event(ReplEvent::LineSubmitted {
            line: line.to_string(),
        })
    }

    #[test]
    fn test_ready_to_executing() {
        let mut sm = ReplStateMachine::default();
        assert!(matches!(sm.phase(), ReplPhase::Ready));

        submit(&mut sm, "help");
        assert!(matches!(
            sm.phase(),
            ReplPhase::Executing {
                command: Command::Help
            }
        ));
    }

    #[test]
    fn test_invalid_command_stays_ready() {
        let mut sm = ReplStateMachine::default();
        let transition = submit(&mut sm, "add");
        assert!(matches!(sm.phase(), ReplPhase::Ready));
        assert!(transition.output.unwrap().contains("valid command"));
    }

    #[test]
    fn test_overlong_line_rejected() {
        let mut sm = ReplStateMachine::new(10);
        let transition = submit(&mut sm, "add abcdefghijklmnop");
        assert!(matches!(sm.phase(), ReplPhase::Ready));
        assert!(transition.output.is_some());
    }

    #[test]
    fn test_execution_error_returns_to_ready() {
        let mut sm = ReplStateMachine::default();
        submit(&mut sm, "read missing.txt");
        let transition = sm.process_event(ReplEvent::ExecutionError {
            message: "\"missing.txt\" not found".to_string(),
        });
        assert!(matches!(sm.phase(), ReplPhase::Ready));
        assert!(!sm.is_terminal());
        assert!(transition.output.unwrap().contains("not found"));

        // The next line is handled normally
        submit(&mut sm, "size");
        assert!(matches!(
            sm.phase(),
            ReplPhase::Executing {
                command: Command::Size
            }
        ));
    }

    #[test]
    fn test_only_exiting_is_terminal() {
        assert!(!ReplPhase::Ready.is_terminal());
        assert!(!ReplPhase::Executing {
            command: Command::List
        }
        .is_terminal());
        assert!(ReplPhase::Exiting.is_terminal());
    }

    #[test]
    fn test_continue_result_returns_to_ready() {
        let mut sm = ReplStateMachine::default();
        submit(&mut sm, "list");
        let transition = sm.process_event(ReplEvent::CommandExecuted {
            result: CommandResult::Continue("Database is empty".to_string()),
        });
        assert!(matches!(sm.phase(), ReplPhase::Ready));
        assert_eq!(transition.output.as_deref(), Some("Database is empty"));
    }

    #[test]
    fn test_exit_result_is_terminal() {
        let mut sm = ReplStateMachine::default();
        submit(&mut sm, "quit");
        sm.process_event(ReplEvent::CommandExecuted {
            result: CommandResult::Exit("Exiting program".to_string()),
        });
        assert!(sm.is_terminal());
    }

    #[test]
    fn test_interrupt_recovery() {
        let mut sm = ReplStateMachine::default();
        sm.process_event(ReplEvent::Interrupted);
        assert!(matches!(sm.phase(), ReplPhase::Ready));
    }

    #[test]
    fn test_eof_exits() {
        let mut sm = ReplStateMachine::default();
        let transition = sm.process_event(ReplEvent::Eof);
        assert!(matches!(sm.phase(), ReplPhase::Exiting));
        assert!(sm.is_terminal());
        assert_eq!(transition.output.as_deref(), Some("Exiting program"));
    }
}
