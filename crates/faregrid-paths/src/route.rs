use faregrid_core::{Grid, Position};

use crate::error::ContractViolation;

/// Outcome of one search: a cell path plus its exploration cost.
///
/// An empty `path` means no route was found; `explored` is still meaningful
/// in that case and is used both for diagnostics and for pricing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    pub path: Vec<Position>,
    pub explored: usize,
}

impl RouteResult {
    /// A successful search.
    pub fn found(path: Vec<Position>, explored: usize) -> Self {
        Self { path, explored }
    }

    /// A search that did not reach the goal.
    pub fn not_found(explored: usize) -> Self {
        Self {
            path: Vec::new(),
            explored,
        }
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the path, endpoints included (0 if no route).
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of steps along the path (0 if no route).
    #[inline]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Check the route against the search contract.
    ///
    /// An empty path always passes. A non-empty one must start at `start`,
    /// end at `goal`, stay on walkable cells and move one cardinal step at a
    /// time.
    pub fn verify(&self, grid: &Grid, start: Position, goal: Position) -> Result<(), ContractViolation> {
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return Ok(());
        };
        if first != start {
            return Err(ContractViolation::WrongStart {
                expected: start,
                found: first,
            });
        }
        if last != goal {
            return Err(ContractViolation::WrongGoal {
                expected: goal,
                found: last,
            });
        }
        if let Some(&p) = self.path.iter().find(|&&p| !grid.is_walkable(p)) {
            return Err(ContractViolation::BlockedCell(p));
        }
        if let Some(w) = self.path.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(ContractViolation::NonAdjacentStep { from: w[0], to: w[1] });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn moves_and_len() {
        let r = RouteResult::found(vec![p(0, 0), p(0, 1), p(1, 1)], 4);
        assert!(r.is_found());
        assert_eq!(r.len(), 3);
        assert_eq!(r.moves(), 2);
        let none = RouteResult::not_found(9);
        assert!(!none.is_found());
        assert_eq!(none.moves(), 0);
        assert_eq!(none.explored, 9);
    }

    #[test]
    fn verify_accepts_valid_and_empty() {
        let g = Grid::open(2, 2).unwrap();
        let r = RouteResult::found(vec![p(0, 0), p(0, 1), p(1, 1)], 3);
        assert_eq!(r.verify(&g, p(0, 0), p(1, 1)), Ok(()));
        assert_eq!(RouteResult::not_found(0).verify(&g, p(0, 0), p(1, 1)), Ok(()));
    }

    #[test]
    fn verify_rejects_broken_routes() {
        let g = Grid::parse("..\n#.").unwrap();
        let jump = RouteResult::found(vec![p(0, 0), p(1, 1)], 1);
        assert_eq!(
            jump.verify(&g, p(0, 0), p(1, 1)),
            Err(ContractViolation::NonAdjacentStep { from: p(0, 0), to: p(1, 1) })
        );
        let wall = RouteResult::found(vec![p(0, 0), p(1, 0), p(1, 1)], 1);
        assert_eq!(
            wall.verify(&g, p(0, 0), p(1, 1)),
            Err(ContractViolation::BlockedCell(p(1, 0)))
        );
        let short = RouteResult::found(vec![p(0, 0), p(0, 1)], 1);
        assert_eq!(
            short.verify(&g, p(0, 0), p(1, 1)),
            Err(ContractViolation::WrongGoal { expected: p(1, 1), found: p(0, 1) })
        );
        let late = RouteResult::found(vec![p(0, 1), p(1, 1)], 1);
        assert!(matches!(
            late.verify(&g, p(0, 0), p(1, 1)),
            Err(ContractViolation::WrongStart { .. })
        ));
    }
}
