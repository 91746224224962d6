//! Bulk load of entries from a whitespace-separated file

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use super::entries::format_insert;
use crate::collection::{Collection, CollectionError};
use crate::commands::core::{read_entries, LoadReport};

/// Insert every token of the file at `path` into `collection`.
///
/// Tokens longer than `max_len` bytes are skipped. A missing or unreadable
/// file is an error; rejected tokens are not.
pub fn load_file(collection: &mut Collection, path: &Path, max_len: usize) -> Result<LoadReport> {
    let tokens = read_entries(path)?;
    debug!(path = %path.display(), tokens = tokens.len(), "entry file read");
    Ok(load_tokens(collection, tokens, max_len))
}

/// Insert already-folded tokens into `collection`.
pub fn load_tokens<I>(collection: &mut Collection, tokens: I, max_len: usize) -> LoadReport
where
    I: IntoIterator<Item = String>,
{
    let mut report = LoadReport::default();

    for token in tokens {
        if token.len() > max_len {
            warn!(len = token.len(), max_len, "skipping overlong token");
            report.skipped_too_long += 1;
            report.messages.push(format!(
                "\"{}\" not added; longer than {} characters",
                token, max_len
            ));
            continue;
        }

        let outcome = collection.insert(token.as_str());
        match &outcome {
            Ok(()) => report.inserted += 1,
            Err(CollectionError::Duplicate(_)) => report.duplicates += 1,
            Err(_) => report.rejected_full += 1,
        }
        report.messages.push(format_insert(&token, &outcome));
    }

    report
}
