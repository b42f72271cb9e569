//! Errors raised while building a [`Grid`](crate::Grid).

use crate::Position;

/// Errors that can occur when constructing a grid from source data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The source matrix has no rows, or its first row has no cells.
    #[error("grid: source matrix is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text map contained a character that is neither floor nor wall.
    #[error("grid: invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Position },
}
