//! Geometry primitive: [`Position`].
//!
//! Rows grow downwards and columns grow to the right, matching the layout of
//! the map matrices the grid is built from.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell address as a (row, column) pair.
///
/// Ordering is row-major: by row first, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit offset one row up.
    pub const UP: Self = Self { row: -1, col: 0 };
    /// Unit offset one row down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// Unit offset one column left.
    pub const LEFT: Self = Self { row: 0, col: -1 };
    /// Unit offset one column right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };

    /// The four unit offsets in search order: up, down, left, right.
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Convert a pixel coordinate to the cell containing it.
    ///
    /// `x` selects the column and `y` the row; division floors so that
    /// negative pixels land in negative (out-of-grid) cells.
    #[inline]
    pub fn from_pixel(x: i32, y: i32, tile_size: i32) -> Self {
        Self {
            row: y.div_euclid(tile_size),
            col: x.div_euclid(tile_size),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
