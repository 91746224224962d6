//! Input normalisation and entry-file reading shared between CLI and REPL

use anyhow::{Context, Result};
use std::path::Path;

/// Fold ASCII uppercase letters to lowercase.
///
/// Only `A`-`Z` are affected; every other byte passes through unchanged.
pub fn fold_case(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Split file contents into case-folded entries.
///
/// Tokens are separated by any whitespace, so a token may start on one line
/// and the next token on the same line or a later one. No quoting or
/// escaping is recognised.
pub fn parse_entries(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(fold_case).collect()
}

/// Read an entry file and return its case-folded tokens.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("\"{}\" not found", path.display()))?;
    Ok(parse_entries(&contents))
}

/// Tally of a bulk load into a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries added
    pub inserted: usize,
    /// Entries already present
    pub duplicates: usize,
    /// Entries rejected because the collection was full
    pub rejected_full: usize,
    /// Tokens longer than the input limit
    pub skipped_too_long: usize,
    /// One line per token, in file order
    pub messages: Vec<String>,
}

impl LoadReport {
    /// Total tokens seen
    pub fn total(&self) -> usize {
        self.inserted + self.duplicates + self.rejected_full + self.skipped_too_long
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fold_case_ascii_only() {
        assert_eq!(fold_case("GaTTaCA"), "gattaca");
        assert_eq!(fold_case("ÉCOLE"), "École");
        assert_eq!(fold_case("a-B_9"), "a-b_9");
    }

    #[test]
    fn test_parse_entries_whitespace() {
        let entries = parse_entries("acgt  TTGA\n\tgattaca\r\n\n cc ");
        assert_eq!(entries, vec!["acgt", "ttga", "gattaca", "cc"]);
    }

    #[test]
    fn test_parse_entries_empty() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries(" \n\t ").is_empty());
    }

    #[test]
    fn test_read_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kitten sitting").unwrap();
        writeln!(file, "BITTEN").unwrap();

        let entries = read_entries(file.path()).unwrap();
        assert_eq!(entries, vec!["kitten", "sitting", "bitten"]);
    }

    #[test]
    fn test_read_entries_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_entries(&path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
