//! # dnamatch
//!
//! A bounded, ordered collection of short strings with Levenshtein
//! edit-distance lookup.
//!
//! Entries are kept in insertion order with no duplicates. A query first
//! checks for an exact entry; otherwise every entry is scored with the
//! edit distance and the closest ones are reported, ties broken by
//! insertion order.
//!
//! ## Example
//!
//! ```rust
//! use dnamatch::prelude::*;
//!
//! let mut collection = Collection::new();
//! for entry in ["kitten", "sitting", "bitten"] {
//!     collection.insert(entry).unwrap();
//! }
//!
//! match find_closest("sittin", &collection, 2) {
//!     MatchOutcome::RankedMatches(matches) => {
//!         assert_eq!(matches[0].entry, "sitting");
//!         assert_eq!(matches[0].distance, 1);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod distance;
pub mod matcher;

/// Command handlers shared by the REPL and the one-shot CLI
#[cfg(feature = "cli")]
pub mod commands;

/// Interactive REPL over one in-memory collection
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::collection::{Collection, CollectionError, DEFAULT_CAPACITY};
    pub use crate::distance::{distance, standard_distance, DistanceGrid};
    pub use crate::matcher::{
        find_closest, MatchOutcome, Matcher, RankedMatch, RankedMatches, DEFAULT_MATCH_COUNT,
    };
}
