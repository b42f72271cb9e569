//! Width-bounded beam search.
//!
//! The beam keeps at most `width` partial paths. Every round each path is
//! extended by one cell in every direction that does not loop back onto the
//! path itself; all extensions are pooled, ranked by Euclidean distance to
//! the goal, and only the best `width` survive. Pruning makes the search
//! fast but blind: it can discard the only branch that reaches the goal.

use faregrid_core::{Grid, Position};

use crate::distance::euclidean;
use crate::route::RouteResult;
use crate::traits::Search;

/// Default number of partial paths kept between rounds.
pub const DEFAULT_WIDTH: usize = 3;

/// Beam search of bounded width.
///
/// Runs at most rows × cols rounds. `explored` is the number of distinct
/// cells that were ever at the head of a beam path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beam {
    width: usize,
}

impl Default for Beam {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl Beam {
    /// A beam search keeping `width` paths per round (at least one).
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    /// Number of paths kept per round.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Search for Beam {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        if grid.index(start).is_none() || grid.index(goal).is_none() {
            return RouteResult::not_found(0);
        }

        let mut heads = vec![false; grid.len()];
        let mut explored = 0;
        let mut beam: Vec<Vec<Position>> = vec![vec![start]];
        let mut candidates: Vec<(f64, Vec<Position>)> = Vec::new();
        let mut nbuf = Vec::with_capacity(4);

        for _ in 0..grid.len() {
            candidates.clear();

            for path in beam.iter() {
                let Some(&head) = path.last() else {
                    continue;
                };
                if let Some(hi) = grid.index(head) {
                    if !heads[hi] {
                        heads[hi] = true;
                        explored += 1;
                    }
                }

                if head == goal {
                    log::debug!(
                        "beam[{}]: {start} -> {goal} in {} moves, explored {explored}",
                        self.width,
                        path.len() - 1
                    );
                    return RouteResult::found(path.clone(), explored);
                }

                nbuf.clear();
                grid.neighbors(head, &mut nbuf);
                for &np in nbuf.iter() {
                    if path.contains(&np) {
                        continue;
                    }
                    let mut next = Vec::with_capacity(path.len() + 1);
                    next.extend_from_slice(path);
                    next.push(np);
                    candidates.push((euclidean(np, goal), next));
                }
            }

            if candidates.is_empty() {
                log::debug!(
                    "beam[{}]: {start} -> {goal} dead end, explored {explored}",
                    self.width
                );
                return RouteResult::not_found(explored);
            }

            // Stable sort keeps generation order among equal estimates.
            candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
            beam = candidates.drain(..).take(self.width).map(|(_, p)| p).collect();
        }

        log::warn!(
            "beam[{}]: {start} -> {goal} round budget of {} exhausted, explored {explored}",
            self.width,
            grid.len()
        );
        RouteResult::not_found(explored)
    }
}
