//! Grid search strategies for faregrid.
//!
//! This crate provides six route searches over a [`Grid`](faregrid_core::Grid),
//! all 4-directional with unit step cost and all behind the [`Search`] trait:
//!
//! - **A\*** with a Euclidean estimate ([`AStar`])
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **BFS** breadth-first search ([`Bfs`])
//! - **Greedy best-first** search ([`Greedy`])
//! - **Beam search** of bounded width ([`Beam`])
//! - **Backtracking** depth-first search with depth and call budgets ([`Backtrack`])
//!
//! Every search returns a [`RouteResult`]: the cell path (empty when no route
//! was found) plus the number of cells explored, which feeds fare pricing.
//! [`to_steps`] turns a path into [`StepCommand`]s for a movement actor.
//!
//! # Optimality
//!
//! | Strategy | Shortest path | Can miss an existing route |
//! |---|---|---|
//! | A\*, Dijkstra, BFS | yes | no |
//! | Greedy | no | no |
//! | Beam | no | yes |
//! | Backtracking | no | yes (budgets) |

mod astar;
mod backtrack;
mod beam;
mod bfs;
mod dijkstra;
mod distance;
mod error;
mod greedy;
#[cfg(test)]
mod invariants;
mod node;
mod route;
mod steps;
mod strategy;
mod traits;

pub use astar::AStar;
pub use backtrack::{Backtrack, DEFAULT_CALLS_FACTOR, DEFAULT_DEPTH_FACTOR};
pub use beam::{Beam, DEFAULT_WIDTH as DEFAULT_BEAM_WIDTH};
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
pub use distance::{euclidean, manhattan};
pub use error::ContractViolation;
pub use greedy::Greedy;
pub use route::RouteResult;
pub use steps::{StepCommand, apply, to_steps};
pub use strategy::{ParseStrategyError, Strategy, StrategyKind};
pub use traits::Search;
