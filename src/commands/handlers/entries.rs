//! Add, remove, list and size handlers

use colored::Colorize;

use crate::collection::{Collection, CollectionError};

/// Insert `entry` and describe the outcome.
pub fn add_entry(collection: &mut Collection, entry: &str) -> String {
    let outcome = collection.insert(entry);
    format_insert(entry, &outcome)
}

/// Describe the outcome of a single insert.
pub fn format_insert(entry: &str, outcome: &Result<(), CollectionError>) -> String {
    match outcome {
        Ok(()) => format!("\"{}\" {}", entry, "added to database".green()),
        Err(CollectionError::Duplicate(_)) => format!(
            "\"{}\" {}",
            entry,
            "not added; already in database".yellow()
        ),
        Err(CollectionError::Full { .. }) => {
            format!("\"{}\" {}", entry, "not added; database is full".red())
        }
        Err(CollectionError::NotFound(_)) => {
            format!("\"{}\" {}", entry, "not added".red())
        }
    }
}

/// Remove `entry` and describe the outcome.
pub fn remove_entry(collection: &mut Collection, entry: &str) -> String {
    match collection.remove(entry) {
        Ok(removed) => format!("{} {}", removed, "removed from database".green()),
        Err(_) => format!("{} {}", entry, "not removed; not in database".yellow()),
    }
}

/// List all entries in insertion order.
pub fn format_list(collection: &Collection) -> String {
    if collection.is_empty() {
        return "Database is empty".yellow().to_string();
    }

    let mut output = format!("{}\n", "Entries in DATABASE:".bold());
    for entry in collection.iter() {
        output.push_str(entry);
        output.push('\n');
    }
    output.trim_end().to_string()
}

/// Report the number of entries.
pub fn format_size(collection: &Collection) -> String {
    format!(
        "{} items in database",
        collection.len().to_string().green().bold()
    )
}
