//! The [`Grid`] type: an immutable walkability matrix.
//!
//! A `Grid` is built once from map data and never mutated afterwards. It is
//! shared by reference with every search, so none of them need locking or
//! copying.

use std::fmt;

use crate::error::GridError;
use crate::geom::Position;

/// Character used for walkable cells by [`Grid::parse`] and `Display`.
pub const FLOOR: char = '.';
/// Character used for blocked cells by [`Grid::parse`] and `Display`.
pub const WALL: char = '#';

/// CSV token marking a walkable cell in floor-block map exports.
const CSV_FLOOR: &str = "-1";

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular matrix of walkable / blocked cells.
///
/// Cells are stored row-major. Dimensions are fixed at construction and
/// every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from a matrix of walkability flags (`true` = walkable).
    ///
    /// Fails if the matrix is empty or if any row's length differs from
    /// the first row's.
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, GridError> {
        let cols = matrix.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(matrix.len() * cols);
        for (row, r) in matrix.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            rows: matrix.len(),
            cols,
        })
    }

    /// Build a grid from floor-block CSV records.
    ///
    /// A cell is walkable when its trimmed token is `-1` or empty; any other
    /// token is a blocking tile id.
    pub fn from_csv_rows<R, S>(records: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let matrix: Vec<Vec<bool>> = records
            .iter()
            .map(|r| {
                r.as_ref()
                    .iter()
                    .map(|tok| {
                        let tok = tok.as_ref().trim();
                        tok.is_empty() || tok == CSV_FLOOR
                    })
                    .collect()
            })
            .collect();
        Self::from_matrix(&matrix)
    }

    /// Parse floor-block CSV text. Blank lines are ignored.
    pub fn from_csv(text: &str) -> Result<Self, GridError> {
        let records: Vec<Vec<&str>> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.split(',').collect())
            .collect();
        Self::from_csv_rows(&records)
    }

    /// Parse an ASCII map where [`FLOOR`] is walkable and [`WALL`] is
    /// blocked.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut matrix: Vec<Vec<bool>> = Vec::new();
        for (row, line) in text.trim().lines().enumerate() {
            let mut r = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    FLOOR => r.push(true),
                    WALL => r.push(false),
                    _ => {
                        return Err(GridError::InvalidTile {
                            ch,
                            pos: Position::new(row as i32, col as i32),
                        });
                    }
                }
            }
            matrix.push(r);
        }
        Self::from_matrix(&matrix)
    }

    /// An obstacle-free grid of the given size.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_matrix(&vec![vec![true; cols]; rows])
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells (rows × cols).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.index(p).is_some()
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Convert a position to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Append the walkable cardinal neighbours of `p` to `buf`, in search
    /// order (up, down, left, right). The caller clears `buf`.
    #[inline]
    pub fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_walkable(n)));
    }

    /// Row-major iterator over every cell position.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.position(i))
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &w in row {
                write!(f, "{}", if w { FLOOR } else { WALL })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#..#
#.##
####";

    #[test]
    fn parse_and_dimensions() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.dimensions(), (4, 4));
        assert_eq!(g.len(), 16);
        assert_eq!(g.walkable_count(), 3);
        assert!(g.is_walkable(Position::new(1, 1)));
        assert!(g.is_walkable(Position::new(2, 1)));
        assert!(!g.is_walkable(Position::new(2, 2)));
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let g = Grid::open(3, 2).unwrap();
        assert!(g.is_walkable(Position::new(2, 1)));
        assert!(!g.is_walkable(Position::new(3, 0)));
        assert!(!g.is_walkable(Position::new(0, 2)));
        assert!(!g.is_walkable(Position::new(-1, 0)));
        assert!(!g.contains(Position::new(0, -1)));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::open(3, 5).unwrap();
        for p in g.positions() {
            let i = g.index(p).unwrap();
            assert_eq!(g.position(i), p);
        }
        assert_eq!(g.index(Position::new(1, 2)), Some(7));
    }

    #[test]
    fn empty_matrix_rejected() {
        let none: Vec<Vec<bool>> = Vec::new();
        assert_eq!(Grid::from_matrix(&none), Err(GridError::Empty));
        assert_eq!(Grid::from_matrix(&[Vec::<bool>::new()]), Err(GridError::Empty));
        assert_eq!(Grid::parse("   "), Err(GridError::Empty));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_matrix(&[vec![true, true], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(Grid::parse("...\n..").is_err());
    }

    #[test]
    fn invalid_tile_rejected() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                ch: 'x',
                pos: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn csv_floor_tokens() {
        let g = Grid::from_csv("-1,-1,12\n -1 ,,0\n\n").unwrap();
        assert_eq!(g.dimensions(), (2, 3));
        assert!(g.is_walkable(Position::new(0, 0)));
        assert!(!g.is_walkable(Position::new(0, 2)));
        assert!(g.is_walkable(Position::new(1, 0)));
        assert!(g.is_walkable(Position::new(1, 1)));
        assert!(!g.is_walkable(Position::new(1, 2)));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g = Grid::parse(ROOM).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Position::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Position::new(2, 1), Position::new(1, 2)]);
        buf.clear();
        g.neighbors(Position::new(0, 0), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn display_round_trip() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }
}
