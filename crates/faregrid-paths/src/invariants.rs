//! Cross-strategy property checks over fixed and random grids.

use faregrid_core::{Grid, Position};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{Search, Strategy, StrategyKind, apply, to_steps};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn lineup() -> Vec<Strategy> {
    StrategyKind::ALL.into_iter().map(Strategy::from).collect()
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_pct: f64) -> Grid {
    let matrix: Vec<Vec<bool>> = (0..rows)
        .map(|_| (0..cols).map(|_| !rng.random_bool(wall_pct)).collect())
        .collect();
    Grid::from_matrix(&matrix).unwrap()
}

fn random_floor(rng: &mut StdRng, grid: &Grid) -> Option<Position> {
    let floor: Vec<Position> = grid.positions().filter(|&q| grid.is_walkable(q)).collect();
    if floor.is_empty() {
        return None;
    }
    Some(floor[rng.random_range(0..floor.len())])
}

#[test]
fn random_grids_keep_every_contract() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..60 {
        let rows = rng.random_range(2..12);
        let cols = rng.random_range(2..12);
        let grid = random_grid(&mut rng, rows, cols, 0.3);
        let (Some(start), Some(goal)) = (random_floor(&mut rng, &grid), random_floor(&mut rng, &grid))
        else {
            continue;
        };

        let bfs = Strategy::from(StrategyKind::Bfs).find(&grid, start, goal);
        for s in lineup() {
            let r = s.find(&grid, start, goal);
            r.verify(&grid, start, goal).unwrap();
            if s.kind().is_optimal() {
                assert_eq!(r.len(), bfs.len(), "{} on\n{grid}", s.name());
            } else if r.is_found() {
                assert!(r.len() >= bfs.len(), "{} on\n{grid}", s.name());
            }
            // Greedy is complete: it only misses when BFS does.
            if s.kind() == StrategyKind::Greedy {
                assert_eq!(r.is_found(), bfs.is_found());
            }
            let steps = to_steps(&r.path).unwrap();
            if let Some(&first) = r.path.first() {
                assert_eq!(apply(first, &steps), r.path);
            }
        }
    }
}

#[test]
fn open_grids_all_pairs_are_manhattan() {
    let optimal: Vec<Strategy> = lineup().into_iter().filter(|s| s.kind().is_optimal()).collect();
    for rows in 1..=6 {
        for cols in 1..=6 {
            let grid = Grid::open(rows, cols).unwrap();
            for start in grid.positions() {
                for goal in grid.positions() {
                    let want = 1 + start.manhattan(goal) as usize;
                    for s in &optimal {
                        let r = s.find(&grid, start, goal);
                        assert_eq!(r.len(), want, "{} {start} -> {goal} on {rows}x{cols}", s.name());
                    }
                }
            }
        }
    }
}

#[test]
fn open_five_by_five_corner_to_corner() {
    let grid = Grid::open(5, 5).unwrap();
    for s in lineup() {
        let r = s.find(&grid, p(0, 0), p(4, 4));
        r.verify(&grid, p(0, 0), p(4, 4)).unwrap();
        if s.kind().is_optimal() {
            assert_eq!(r.len(), 9, "{}", s.name());
        } else if s.kind() == StrategyKind::Backtracking {
            assert!(r.len() >= 9);
        } else if r.is_found() {
            assert!(r.len() >= 9, "{}", s.name());
        }
    }
}

#[test]
fn start_equals_goal_everywhere() {
    let grid = Grid::parse("...\n.#.\n...").unwrap();
    for s in lineup() {
        let r = s.find(&grid, p(2, 1), p(2, 1));
        assert_eq!(r.path, vec![p(2, 1)], "{}", s.name());
    }
}

#[test]
fn enclosed_goal_fails_everywhere() {
    let grid = Grid::parse(
        "\
.....
..#..
.#.#.
..#..",
    )
    .unwrap();
    for s in lineup() {
        let r = s.find(&grid, p(0, 0), p(2, 2));
        assert!(!r.is_found(), "{}", s.name());
        assert!(r.explored > 0, "{}", s.name());
    }
}

#[test]
fn single_gap_wall() {
    let grid = Grid::parse(
        "\
.....
.....
###.#
.....
.....",
    )
    .unwrap();
    let (start, goal) = (p(0, 0), p(4, 0));
    for s in lineup() {
        let r = s.find(&grid, start, goal);
        r.verify(&grid, start, goal).unwrap();
        if s.kind().is_optimal() {
            assert_eq!(r.len(), 11, "{}", s.name());
            assert!(r.path.contains(&p(2, 3)));
        }
        if s.kind() == StrategyKind::Backtracking {
            assert!(r.is_found());
            assert!(r.path.contains(&p(2, 3)));
        }
    }
}
