//! Closest-entry search over a [`Collection`].
//!
//! Every member is scored with [`standard_distance`] against the query and
//! the `k` lowest scores are reported. Ties are broken by insertion order:
//! the earliest-inserted member wins, and each member appears at most once.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::collection::Collection;
use crate::distance::standard_distance;

/// Number of matches reported when none is specified.
pub const DEFAULT_MATCH_COUNT: usize = 3;

/// One ranked row of matcher output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch {
    /// Edit distance from the query
    pub distance: usize,
    /// Insertion position of the member in the collection
    pub index: usize,
    /// The member itself
    pub entry: String,
}

/// Ranked rows, stored inline for the default match count.
pub type RankedMatches = SmallVec<[RankedMatch; DEFAULT_MATCH_COUNT]>;

/// Result of a closest-entry search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The collection has no members
    Empty,
    /// The query is itself a member; no ranking was performed
    ExactMatch(String),
    /// The `k_eff` closest members, ascending by distance then insertion order
    RankedMatches(RankedMatches),
}

impl MatchOutcome {
    /// Number of reported entries (1 for an exact match).
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::ExactMatch(_) => 1,
            Self::RankedMatches(matches) => matches.len(),
        }
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Closest-entry search with a fixed result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    k: usize,
}

impl Matcher {
    /// Create a matcher reporting at most `k` ranked matches.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Maximum number of ranked matches.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Search `collection` for the members closest to `query`.
    pub fn find_closest(&self, query: &str, collection: &Collection) -> MatchOutcome {
        find_closest(query, collection, self.k)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_COUNT)
    }
}

/// Search `collection` for the `k` members closest to `query`.
///
/// # Example
///
/// ```rust
/// use dnamatch::collection::Collection;
/// use dnamatch::matcher::{find_closest, MatchOutcome};
///
/// let mut collection = Collection::new();
/// for entry in ["kitten", "sitting", "bitten"] {
///     collection.insert(entry).unwrap();
/// }
///
/// match find_closest("sittin", &collection, 3) {
///     MatchOutcome::RankedMatches(matches) => {
///         assert_eq!(matches[0].entry, "sitting");
///         assert_eq!(matches[0].distance, 1);
///     }
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn find_closest(query: &str, collection: &Collection, k: usize) -> MatchOutcome {
    if collection.is_empty() {
        debug!(query = %query, "no match possible: collection is empty");
        return MatchOutcome::Empty;
    }

    if let Some(index) = collection.position(query) {
        debug!(query = %query, index, "exact match");
        return MatchOutcome::ExactMatch(query.to_string());
    }

    let mut scored: Vec<(usize, usize)> = collection
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let distance = standard_distance(query, entry);
            trace!(entry = %entry, distance, "scored candidate");
            (distance, index)
        })
        .collect();

    // Stable, and the index is part of the key, so equal distances keep
    // insertion order.
    scored.sort_by_key(|&(distance, index)| (distance, index));

    let k_eff = k.min(collection.len());
    let matches: RankedMatches = scored
        .into_iter()
        .take(k_eff)
        .filter_map(|(distance, index)| {
            collection.get(index).map(|entry| RankedMatch {
                distance,
                index,
                entry: entry.to_string(),
            })
        })
        .collect();

    debug!(query = %query, k_eff, "ranked matches selected");
    MatchOutcome::RankedMatches(matches)
}
