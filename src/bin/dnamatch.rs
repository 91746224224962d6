//! dnamatch - DNA Matcher
//!
//! Interactive collection of short strings with edit-distance lookup.

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dnamatch::cli::commands;
use dnamatch::cli::{Cli, Commands, PersistentConfig, ReplOptions};
use dnamatch::repl::{
    MatcherHelper, ReplConfig, ReplEvent, ReplPhase, ReplState, ReplStateMachine,
};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        None => run_repl(&ReplOptions::default(), None, config_path),
        Some(Commands::Repl { options, preload }) => run_repl(&options, preload, config_path),
        Some(command) => commands::execute(command, config_path),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_repl(
    options: &ReplOptions,
    preload: Option<PathBuf>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = PersistentConfig::load_from(config_path).unwrap_or_else(|e| {
        warn!("could not load config, using defaults: {:#}", e);
        PersistentConfig::default()
    });
    let config = config.merge_with_cli(options, preload);

    print_banner();

    let mut state = ReplState::with_settings(
        config.capacity(),
        config.match_count(),
        config.max_input_len(),
    );

    if let Some(ref path) = config.preload {
        match state.load_from_file(path) {
            Ok(report) => println!(
                "  Read {} entries from {}\n",
                report.inserted.to_string().green().bold(),
                path.display().to_string().cyan()
            ),
            Err(e) => eprintln!("  {}: {:#}\n", "Warning".yellow(), e),
        }
    }
    print!("{}", state.stats());
    println!();

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .max_history_size(repl_config.max_history)?
        .build();

    let mut editor: Editor<MatcherHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(MatcherHelper::new()));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    let mut state_machine = ReplStateMachine::new(state.max_input_len);

    while !state_machine.is_terminal() {
        let event = match editor.readline(&repl_config.prompt) {
            Ok(line) => ReplEvent::LineSubmitted {
                line: line.trim().to_string(),
            },
            Err(ReadlineError::Interrupted) => ReplEvent::Interrupted,
            Err(ReadlineError::Eof) => ReplEvent::Eof,
            Err(err) => {
                eprintln!("{}: {}", "Non valid input".red().bold(), err);
                break;
            }
        };

        let transition = state_machine.process_event(event);

        if let Some(output) = transition.output {
            println!("{}", output);
        }

        if let ReplPhase::Executing { command } = state_machine.phase().clone() {
            let follow_up = match command.execute(&mut state) {
                Ok(result) => ReplEvent::CommandExecuted { result },
                Err(e) => ReplEvent::ExecutionError {
                    message: format!("{:#}", e),
                },
            };

            if let Some(output) = state_machine.process_event(follow_up).output {
                println!("{}", output);
            }
        }
    }

    let released = state.release();
    debug!(released, "session ended");

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            warn!("failed to save history: {}", e);
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        format!("Welcome to DNA Matcher v{}", env!("CARGO_PKG_VERSION"))
            .bright_cyan()
            .bold()
    );
    println!(
        "  Type {} for available commands, {} or {} to exit",
        "'help'".yellow().bold(),
        "'quit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}
