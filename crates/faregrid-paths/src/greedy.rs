use std::collections::BinaryHeap;

use faregrid_core::{Grid, Position};

use crate::distance::euclidean;
use crate::node::{NodeRef, Trail};
use crate::route::RouteResult;
use crate::traits::Search;

/// Greedy best-first search: frontier ordered purely by the Euclidean
/// estimate to the goal, ignoring distance travelled.
///
/// Complete but not optimal. Cells are marked visited at first enqueue;
/// `explored` counts pops, the goal included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greedy;

impl Search for Greedy {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return RouteResult::not_found(0);
        };

        let mut visited = vec![false; grid.len()];
        let mut trail = Trail::new(grid.len());
        let mut explored = 0;

        visited[start_idx] = true;
        let h0 = euclidean(start, goal);
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            pos: start,
            f: h0,
            h: h0,
        });

        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            explored += 1;
            let ci = current.idx;

            if ci == goal_idx {
                let path = trail.path(grid, goal_idx);
                log::debug!("greedy: {start} -> {goal} in {} moves, explored {explored}", path.len() - 1);
                return RouteResult::found(path, explored);
            }

            nbuf.clear();
            grid.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                trail.link(ni, ci);
                let h = euclidean(np, goal);
                open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: h,
                    h,
                });
            }
        }

        log::debug!("greedy: {start} -> {goal} unreachable, explored {explored}");
        RouteResult::not_found(explored)
    }
}
