//! Edit distance computation.
//!
//! Two entry points compute the same standard Levenshtein distance (unit cost
//! for insertion, deletion and substitution):
//!
//! - [`distance`]: builds the full [`DistanceGrid`] so callers can display it
//! - [`standard_distance`]: space-optimised two-row variant returning only the cost
//!
//! Strings are compared byte by byte; there is no Unicode normalisation.

use std::fmt;

/// Dynamic programming grid for a single comparison.
///
/// Has `len(a) + 1` rows and `len(b) + 1` columns. Row 0 and column 0 hold the
/// cost of transforming a prefix to or from the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceGrid {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceGrid {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }

    /// Number of rows (`len(a) + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(b) + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// A full row of the grid
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over the rows of the grid
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }

    /// The edit distance, found in the bottom-right cell.
    pub fn cost(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

impl fmt::Display for DistanceGrid {
    /// Renders each row as space-separated integers followed by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Compute the Levenshtein distance between `a` and `b`, keeping the grid.
///
/// # Example
///
/// ```rust
/// use dnamatch::distance::distance;
///
/// let grid = distance("kitten", "sitting");
/// assert_eq!(grid.cost(), 3);
/// assert_eq!(grid.rows(), 7);
/// assert_eq!(grid.cols(), 8);
/// ```
pub fn distance(a: &str, b: &str) -> DistanceGrid {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut grid = DistanceGrid::zeroed(rows, cols);

    for i in 0..rows {
        grid.set(i, 0, i);
    }
    for j in 0..cols {
        grid.set(0, j, j);
    }

    for i in 1..rows {
        for j in 1..cols {
            let diagonal = grid.cells[(i - 1) * cols + (j - 1)];
            let value = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                let up = grid.cells[(i - 1) * cols + j];
                let left = grid.cells[i * cols + (j - 1)];
                1 + up.min(left).min(diagonal)
            };
            grid.set(i, j, value);
        }
    }

    grid
}

/// Compute the Levenshtein distance between two strings without keeping the grid.
///
/// Uses two rows instead of the full matrix. Always agrees with
/// `distance(source, target).cost()`.
///
/// # Example
///
/// ```rust
/// use dnamatch::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source = source.as_bytes();
    let target = target.as_bytes();

    let m = source.len();
    let n = target.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
