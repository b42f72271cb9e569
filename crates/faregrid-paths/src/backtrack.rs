//! Bounded backtracking depth-first search.
//!
//! The search walks depth-first in the fixed order up, down, left, right,
//! never stepping onto a cell already on the current path, and returns the
//! first route that reaches the goal. Two budgets, both proportional to the
//! grid area, keep it from running away:
//!
//! - **depth**: a cell deeper than the limit is refused and the search
//!   unwinds to try the next direction;
//! - **calls**: once the total number of cell visits passes the limit the
//!   whole search gives up.
//!
//! The walk uses an explicit stack rather than recursion, so deep corridors
//! cannot overflow the thread stack.

use faregrid_core::{Grid, Position};

use crate::route::RouteResult;
use crate::traits::Search;

/// Default depth budget, as a multiple of rows × cols.
pub const DEFAULT_DEPTH_FACTOR: f64 = 1.5;
/// Default call budget, as a multiple of rows × cols.
pub const DEFAULT_CALLS_FACTOR: f64 = 5.0;

/// Backtracking depth-first search with depth and call budgets.
///
/// `explored` is the number of cell visits made, capped at the call budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Backtrack {
    depth_factor: f64,
    calls_factor: f64,
}

impl Default for Backtrack {
    fn default() -> Self {
        Self {
            depth_factor: DEFAULT_DEPTH_FACTOR,
            calls_factor: DEFAULT_CALLS_FACTOR,
        }
    }
}

impl Backtrack {
    /// A backtracking search with the given budget factors.
    ///
    /// Negative or non-finite factors are treated as zero.
    pub fn new(depth_factor: f64, calls_factor: f64) -> Self {
        let clean = |f: f64| if f.is_finite() { f.max(0.0) } else { 0.0 };
        Self {
            depth_factor: clean(depth_factor),
            calls_factor: clean(calls_factor),
        }
    }

    /// Depth budget as a multiple of the grid area.
    #[inline]
    pub fn depth_factor(&self) -> f64 {
        self.depth_factor
    }

    /// Call budget as a multiple of the grid area.
    #[inline]
    pub fn calls_factor(&self) -> f64 {
        self.calls_factor
    }

    /// (max depth, max calls) for a grid of the given area.
    pub fn budgets(&self, area: usize) -> (usize, usize) {
        let area = area as f64;
        (
            (area * self.depth_factor) as usize,
            (area * self.calls_factor) as usize,
        )
    }
}

/// One cell on the current path and the next direction to try from it.
struct Frame {
    pos: Position,
    idx: usize,
    next_dir: usize,
}

impl Search for Backtrack {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        let Some(start_idx) = grid.index(start) else {
            return RouteResult::not_found(0);
        };

        let (max_depth, max_calls) = self.budgets(grid.len());
        let mut on_path = vec![false; grid.len()];
        let mut stack: Vec<Frame> = Vec::new();
        let mut calls = 0usize;
        let mut depth_cutoffs = 0usize;
        let mut pending = Some((start, start_idx));

        loop {
            if let Some((pos, idx)) = pending.take() {
                calls += 1;
                if calls > max_calls {
                    log::warn!(
                        "backtrack: {start} -> {goal} call budget of {max_calls} exhausted \
                         ({depth_cutoffs} depth cutoffs)"
                    );
                    return RouteResult::not_found(max_calls);
                }
                if stack.len() > max_depth {
                    depth_cutoffs += 1;
                } else {
                    on_path[idx] = true;
                    stack.push(Frame {
                        pos,
                        idx,
                        next_dir: 0,
                    });
                    if pos == goal {
                        let path: Vec<Position> = stack.iter().map(|f| f.pos).collect();
                        log::debug!(
                            "backtrack: {start} -> {goal} in {} moves, explored {calls}",
                            path.len() - 1
                        );
                        return RouteResult::found(path, calls);
                    }
                }
            }

            let Some(frame) = stack.last_mut() else {
                break;
            };

            let Some(&dir) = Position::CARDINALS.get(frame.next_dir) else {
                // All directions tried: unwind.
                on_path[frame.idx] = false;
                stack.pop();
                continue;
            };
            frame.next_dir += 1;

            let next = frame.pos + dir;
            if let Some(ni) = grid.index(next) {
                if grid.is_walkable(next) && !on_path[ni] {
                    pending = Some((next, ni));
                }
            }
        }

        if depth_cutoffs > 0 {
            log::warn!(
                "backtrack: {start} -> {goal} failed after {depth_cutoffs} depth cutoffs \
                 (max depth {max_depth}), explored {calls}"
            );
        } else {
            log::debug!("backtrack: {start} -> {goal} unreachable, explored {calls}");
        }
        RouteResult::not_found(calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn budgets_scale_with_area() {
        assert_eq!(Backtrack::default().budgets(100), (150, 500));
        assert_eq!(Backtrack::new(0.5, 1.0).budgets(5), (2, 5));
        assert_eq!(Backtrack::new(-1.0, f64::NAN).budgets(10), (0, 0));
    }

    #[test]
    fn factors_are_cleaned_on_construction() {
        let d = Backtrack::default();
        assert_eq!(d.depth_factor(), DEFAULT_DEPTH_FACTOR);
        assert_eq!(d.calls_factor(), DEFAULT_CALLS_FACTOR);
        let b = Backtrack::new(-2.0, f64::INFINITY);
        assert_eq!((b.depth_factor(), b.calls_factor()), (0.0, 0.0));
        let b = Backtrack::new(0.25, 3.0);
        assert_eq!((b.depth_factor(), b.calls_factor()), (0.25, 3.0));
    }

    #[test]
    fn follows_fixed_direction_order() {
        // Up and down are tried before right, so from the top row the walk
        // dives down the left column before heading right.
        let grid = Grid::open(2, 2).unwrap();
        let r = Backtrack::default().find(&grid, p(0, 0), p(0, 1));
        assert_eq!(r.path, vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)]);
        assert_eq!(r.explored, 4);
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::open(3, 3).unwrap();
        let r = Backtrack::default().find(&grid, p(1, 1), p(1, 1));
        assert_eq!(r.path, vec![p(1, 1)]);
        assert_eq!(r.explored, 1);
    }

    #[test]
    fn open_grid_route_is_valid_but_long() {
        let grid = Grid::open(5, 5).unwrap();
        let r = Backtrack::default().find(&grid, p(0, 0), p(4, 4));
        r.verify(&grid, p(0, 0), p(4, 4)).unwrap();
        assert!(r.len() >= 9);
    }

    #[test]
    fn unreachable_goal_counts_every_visit() {
        let grid = Grid::parse("..#.").unwrap();
        let r = Backtrack::default().find(&grid, p(0, 0), p(0, 3));
        assert!(!r.is_found());
        // (0,0) then (0,1); nothing else is reachable.
        assert_eq!(r.explored, 2);
    }

    #[test]
    fn call_budget_caps_explored() {
        let grid = Grid::open(4, 4).unwrap();
        let bt = Backtrack::new(1.5, 0.25);
        let r = bt.find(&grid, p(0, 0), p(0, 3));
        assert!(!r.is_found());
        assert_eq!(r.explored, 4);
    }

    #[test]
    fn depth_budget_prunes_long_branches() {
        // A 1×6 corridor needs depth 5 to reach the far end.
        let grid = Grid::open(1, 6).unwrap();
        let shallow = Backtrack::new(0.5, 5.0).find(&grid, p(0, 0), p(0, 5));
        assert!(!shallow.is_found());
        let deep = Backtrack::new(1.0, 5.0).find(&grid, p(0, 0), p(0, 5));
        assert_eq!(deep.len(), 6);
    }
}
