//! Command handler implementations

pub mod compare;
pub mod entries;
pub mod read;
pub mod retrieve;
