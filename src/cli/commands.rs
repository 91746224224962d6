//! CLI command implementations

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::collection::Collection;
use crate::commands::fold_case;
use crate::commands::handlers::{compare, read, retrieve};
use crate::matcher::Matcher;

use super::args::{Commands, ReplOptions};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a one-shot CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Repl { .. } => bail!("The REPL is started by the binary, not as a one-shot command"),
        Commands::Compare { a, b } => cmd_compare(&a, &b),
        Commands::Retrieve {
            query,
            dict,
            options,
        } => cmd_retrieve(&query, &dict, &options, config_path),
        Commands::Settings {
            set_capacity,
            set_matches,
            set_max_input,
            set_preload,
            reset,
        } => cmd_settings(
            set_capacity,
            set_matches,
            set_max_input,
            set_preload,
            reset,
            config_path,
        ),
    }
}

/// Compare command
fn cmd_compare(a: &str, b: &str) -> Result<()> {
    println!("{}", compare::compare(&fold_case(a), &fold_case(b)));
    Ok(())
}

/// Retrieve command
fn cmd_retrieve(
    query: &str,
    dict: &Path,
    options: &ReplOptions,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(options, None);

    let mut collection = Collection::with_capacity(config.capacity());
    let report = read::load_file(&mut collection, dict, config.max_input_len())?;
    debug!(
        inserted = report.inserted,
        duplicates = report.duplicates,
        rejected = report.rejected_full + report.skipped_too_long,
        "entries loaded for retrieve"
    );

    let matcher = Matcher::new(config.match_count());
    println!("{}", retrieve::retrieve(&matcher, &collection, &fold_case(query)));
    Ok(())
}

/// Settings command
fn cmd_settings(
    set_capacity: Option<usize>,
    set_matches: Option<usize>,
    set_max_input: Option<usize>,
    set_preload: Option<PathBuf>,
    reset: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let path = config_file_path_with_override(config_path)?;

    if reset {
        PersistentConfig::default().save_to(config_path)?;
        println!(
            "Configuration reset to defaults ({})",
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path)?;
    let changed = set_capacity.is_some()
        || set_matches.is_some()
        || set_max_input.is_some()
        || set_preload.is_some();

    if changed {
        let options = ReplOptions {
            capacity: set_capacity,
            matches: set_matches,
            max_input: set_max_input,
        };
        config = config.merge_with_cli(&options, set_preload);
        config.save_to(config_path)?;
        println!("{}", "Settings updated".green());
    }

    println!("{}", "Current Settings:".bold().underline());
    print!("{}", config);
    println!("\n  Config file: {}", path.display().to_string().cyan());
    Ok(())
}
