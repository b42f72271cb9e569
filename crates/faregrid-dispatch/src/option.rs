//! The priced menu handed to a selection surface.

use faregrid_core::Position;
use faregrid_paths::{RouteResult, StrategyKind};
use serde::Serialize;

use crate::fare::Fare;

/// Overall status of a successful evaluation.
pub const READY: &str = "ready";

/// One strategy's route and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOption {
    pub strategy: StrategyKind,
    pub result: RouteResult,
    pub fare: Fare,
}

impl PricedOption {
    /// An option that cannot be bought, used when the request itself is
    /// rejected.
    pub fn disabled(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            result: RouteResult::not_found(0),
            fare: Fare::Unavailable,
        }
    }

    /// Whether the option can be committed.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.fare.is_available()
    }

    /// Short human-readable summary for a menu line.
    pub fn status(&self) -> String {
        match self.fare {
            Fare::Amount(a) => format!(
                "fare {a} (moves {}, explored {})",
                self.result.moves(),
                self.result.explored
            ),
            Fare::Unavailable => format!("no route (explored {})", self.result.explored),
        }
    }
}

/// The outcome of evaluating a request: one option per strategy, in menu
/// order, plus an overall status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub start: Position,
    pub goal: Position,
    pub options: Vec<PricedOption>,
    pub status: String,
}

impl Evaluation {
    /// Whether the endpoints were accepted and the strategies ran.
    pub fn is_ready(&self) -> bool {
        self.status == READY
    }

    pub fn get(&self, index: usize) -> Option<&PricedOption> {
        self.options.get(index)
    }

    /// Options that can be bought, with their menu index.
    pub fn available(&self) -> impl Iterator<Item = (usize, &PricedOption)> {
        self.options.iter().enumerate().filter(|(_, o)| o.is_available())
    }

    /// The cheapest available option. Ties go to the earlier menu entry.
    pub fn cheapest(&self) -> Option<(usize, &PricedOption)> {
        self.available().min_by_key(|(i, o)| (o.fare, *i))
    }

    /// Menu index of the option for `kind`.
    pub fn position_of(&self, kind: StrategyKind) -> Option<usize> {
        self.options.iter().position(|o| o.strategy == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(strategy: StrategyKind, len: usize, explored: usize, fare: Fare) -> PricedOption {
        let path = (0..len as i32).map(|c| Position::new(0, c)).collect();
        PricedOption {
            strategy,
            result: RouteResult::found(path, explored),
            fare,
        }
    }

    #[test]
    fn status_lines() {
        let o = option(StrategyKind::Bfs, 9, 20, Fare::Amount(10));
        assert_eq!(o.status(), "fare 10 (moves 8, explored 20)");
        let mut none = PricedOption::disabled(StrategyKind::Beam);
        none.result.explored = 7;
        assert_eq!(none.status(), "no route (explored 7)");
        assert!(!none.is_available());
    }

    #[test]
    fn cheapest_skips_unavailable_and_prefers_menu_order() {
        let eval = Evaluation {
            start: Position::new(0, 0),
            goal: Position::new(0, 3),
            options: vec![
                option(StrategyKind::AStar, 4, 3, Fare::Amount(12)),
                PricedOption::disabled(StrategyKind::Dijkstra),
                option(StrategyKind::Bfs, 4, 9, Fare::Amount(11)),
                option(StrategyKind::Greedy, 4, 4, Fare::Amount(11)),
            ],
            status: READY.into(),
        };
        assert!(eval.is_ready());
        assert_eq!(eval.available().count(), 3);
        assert_eq!(eval.cheapest().map(|(i, _)| i), Some(2));
        assert_eq!(eval.position_of(StrategyKind::Greedy), Some(3));
        assert_eq!(eval.position_of(StrategyKind::Backtracking), None);
    }
}
