use faregrid_core::{Grid, Position};

use crate::route::RouteResult;

/// Shared contract of every route search.
///
/// Callers must have checked that both `start` and `goal` are walkable;
/// implementations do not re-validate. A search never mutates the grid and
/// keeps all of its scratch state local to the call.
pub trait Search {
    /// Search for a route from `start` to `goal`.
    ///
    /// Returns an empty path when no route was found (or a budget ran out),
    /// together with however many cells were explored.
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult;
}
