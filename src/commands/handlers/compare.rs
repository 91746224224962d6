//! Two-string comparison handler

use colored::Colorize;

use crate::distance::{distance, DistanceGrid};

/// Render a grid followed by its final cost.
pub fn format_comparison(grid: &DistanceGrid) -> String {
    format!(
        "{}Difference = {}",
        grid,
        grid.cost().to_string().green().bold()
    )
}

/// Compare `a` with `b` and render the result.
pub fn compare(a: &str, b: &str) -> String {
    format_comparison(&distance(a, b))
}
