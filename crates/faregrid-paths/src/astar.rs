use std::collections::BinaryHeap;

use faregrid_core::{Grid, Position};

use crate::distance::euclidean;
use crate::node::{NodeRef, Trail};
use crate::route::RouteResult;
use crate::traits::Search;

/// A* search: frontier ordered by cost-so-far plus the Euclidean estimate
/// to the goal.
///
/// Optimal, because the estimate never exceeds the true remaining cost.
/// `explored` counts cells popped for expansion; the final goal pop is not
/// an expansion and is not counted.
///
/// A cell sits on the frontier at most once. Finding a cheaper cost for a
/// queued cell updates its cost and parent but leaves its queued priority
/// alone; the cell is pushed again only after it has been popped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStar;

impl Search for AStar {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return RouteResult::not_found(0);
        };

        let mut g = vec![usize::MAX; grid.len()];
        let mut in_open = vec![false; grid.len()];
        let mut trail = Trail::new(grid.len());
        let mut explored = 0;

        g[start_idx] = 0;
        in_open[start_idx] = true;
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
            let ci = current.idx;

            // Terminal only once the goal leaves the frontier.
            if ci == goal_idx {
                let path = trail.path(grid, goal_idx);
                log::debug!("astar: {start} -> {goal} in {} moves, explored {explored}", path.len() - 1);
                return RouteResult::found(path, explored);
            }

            in_open[ci] = false;
            explored += 1;

            let current_g = g[ci];
            nbuf.clear();
            grid.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                if tentative_g >= g[ni] {
                    continue;
                }
                g[ni] = tentative_g;
                trail.link(ni, ci);
                if in_open[ni] {
                    continue;
                }

                in_open[ni] = true;
                let h = euclidean(np, goal);
                open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: tentative_g as f64 + h,
                    h,
                });
            }
        }

        log::debug!("astar: {start} -> {goal} unreachable, explored {explored}");
        RouteResult::not_found(explored)
    }
}
