use std::collections::VecDeque;

use faregrid_core::{Grid, Position};

use crate::node::Trail;
use crate::route::RouteResult;
use crate::traits::Search;

/// Breadth-first search over unit-cost steps.
///
/// Optimal on this grid. Cells are marked visited when enqueued, so none is
/// queued twice; `explored` counts dequeues, the goal included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl Search for Bfs {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return RouteResult::not_found(0);
        };

        let mut visited = vec![false; grid.len()];
        let mut trail = Trail::new(grid.len());
        let mut queue: VecDeque<(usize, Position)> = VecDeque::new();
        let mut explored = 0;

        visited[start_idx] = true;
        queue.push_back((start_idx, start));

        let mut nbuf = Vec::with_capacity(4);

        while let Some((ci, cp)) = queue.pop_front() {
            explored += 1;

            if ci == goal_idx {
                let path = trail.path(grid, goal_idx);
                log::debug!("bfs: {start} -> {goal} in {} moves, explored {explored}", path.len() - 1);
                return RouteResult::found(path, explored);
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                trail.link(ni, ci);
                queue.push_back((ni, np));
            }
        }

        log::debug!("bfs: {start} -> {goal} unreachable, explored {explored}");
        RouteResult::not_found(explored)
    }
}
