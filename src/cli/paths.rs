//! Configuration directory and persistent settings

use super::args::ReplOptions;
use crate::collection::DEFAULT_CAPACITY;
use crate::matcher::DEFAULT_MATCH_COUNT;
use crate::repl::state::DEFAULT_MAX_INPUT_LEN;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for dnamatch
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("dnamatch"))
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => config_file_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Collection capacity
    pub capacity: Option<usize>,
    /// Matches reported by retrieve
    pub match_count: Option<usize>,
    /// Longest accepted input line or entry
    pub max_input_len: Option<usize>,
    /// Entry file read at REPL start-up
    pub preload: Option<PathBuf>,
}

impl PersistentConfig {
    /// Load configuration from custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path (or the default location)
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        validate_config_path(&path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, options: &ReplOptions, preload: Option<PathBuf>) -> Self {
        Self {
            capacity: options.capacity.or(self.capacity),
            match_count: options.matches.or(self.match_count),
            max_input_len: options.max_input.or(self.max_input_len),
            preload: preload.or_else(|| self.preload.clone()),
        }
    }

    /// Effective capacity
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Effective match count
    pub fn match_count(&self) -> usize {
        self.match_count.unwrap_or(DEFAULT_MATCH_COUNT)
    }

    /// Effective input length limit
    pub fn max_input_len(&self) -> usize {
        self.max_input_len.unwrap_or(DEFAULT_MAX_INPUT_LEN)
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            match_count: Some(DEFAULT_MATCH_COUNT),
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            preload: None,
        }
    }
}

impl std::fmt::Display for PersistentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Capacity:        {}", self.capacity())?;
        writeln!(f, "  Matches:         {}", self.match_count())?;
        writeln!(f, "  Max input:       {}", self.max_input_len())?;
        writeln!(
            f,
            "  Preload:         {}",
            self.preload
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string())
        )
    }
}
