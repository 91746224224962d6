//! Bounded, ordered, duplicate-free set of entries.
//!
//! Entries keep their insertion order. Removing an entry shifts the later
//! ones down, so positions are always contiguous. Values are compared
//! literally: any case folding must happen before an entry reaches the
//! collection.

pub mod error;

pub use error::{CollectionError, Result};

use tracing::debug;

/// Capacity used by [`Collection::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Ordered set of unique strings with a fixed maximum size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<String>,
    capacity: usize,
}

impl Collection {
    /// Create an empty collection with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty collection that accepts at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Append `entry` at the end.
    ///
    /// Duplicates are checked before capacity, so a full collection still
    /// reports [`CollectionError::Duplicate`] for a value it already holds.
    pub fn insert(&mut self, entry: impl Into<String>) -> Result<()> {
        let entry = entry.into();

        if self.contains(&entry) {
            debug!(entry = %entry, "insert rejected: duplicate");
            return Err(CollectionError::Duplicate(entry));
        }
        if self.is_full() {
            debug!(entry = %entry, capacity = self.capacity, "insert rejected: full");
            return Err(CollectionError::Full {
                capacity: self.capacity,
            });
        }

        debug!(entry = %entry, position = self.entries.len(), "entry inserted");
        self.entries.push(entry);
        Ok(())
    }

    /// Insert each entry in turn, returning one outcome per input.
    pub fn insert_all<I, S>(&mut self, entries: I) -> Vec<(String, Result<()>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let entry = entry.into();
                let outcome = self.insert(entry.clone());
                (entry, outcome)
            })
            .collect()
    }

    /// Remove the entry equal to `entry` and return it.
    ///
    /// Later entries move down one position; relative order is preserved.
    pub fn remove(&mut self, entry: &str) -> Result<String> {
        match self.position(entry) {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(entry = %removed, position = index, "entry removed");
                Ok(removed)
            }
            None => {
                debug!(entry = %entry, "remove rejected: not found");
                Err(CollectionError::NotFound(entry.to_string()))
            }
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, entry: &str) -> bool {
        self.position(entry).is_some()
    }

    /// Insertion position of `entry`, if stored.
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    /// Entry at insertion position `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another insert would be rejected as full.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Release every entry. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.entries.shrink_to_fit();
        debug!(count, "collection cleared");
        count
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
