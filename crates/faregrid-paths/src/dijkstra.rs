use std::collections::BinaryHeap;

use faregrid_core::{Grid, Position};

use crate::node::{NodeRef, Trail};
use crate::route::RouteResult;
use crate::traits::Search;

/// Uniform-cost search ordered by cost-so-far alone.
///
/// The heuristic-free baseline to [`AStar`](crate::AStar). `explored`
/// counts every settled cell, the goal included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Search for Dijkstra {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return RouteResult::not_found(0);
        };

        let mut dist = vec![usize::MAX; grid.len()];
        let mut settled = vec![false; grid.len()];
        let mut trail = Trail::new(grid.len());
        let mut explored = 0;

        dist[start_idx] = 0;
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            pos: start,
            f: 0.0,
            h: 0.0,
        });

        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if settled[ci] {
                continue;
            }
            settled[ci] = true;
            explored += 1;

            if ci == goal_idx {
                let path = trail.path(grid, goal_idx);
                log::debug!("dijkstra: {start} -> {goal} in {} moves, explored {explored}", path.len() - 1);
                return RouteResult::found(path, explored);
            }

            let current_dist = dist[ci];
            nbuf.clear();
            grid.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative = current_dist + 1;
                if settled[ni] || tentative >= dist[ni] {
                    continue;
                }
                dist[ni] = tentative;
                trail.link(ni, ci);
                open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: tentative as f64,
                    h: 0.0,
                });
            }
        }

        log::debug!("dijkstra: {start} -> {goal} unreachable, explored {explored}");
        RouteResult::not_found(explored)
    }
}
