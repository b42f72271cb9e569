//! The strategy catalogue: a tag per search and a tagged dispatcher over
//! the six [`Search`] implementations.

use std::fmt;
use std::str::FromStr;

use faregrid_core::{Grid, Position};

use crate::astar::AStar;
use crate::backtrack::Backtrack;
use crate::beam::Beam;
use crate::bfs::Bfs;
use crate::dijkstra::Dijkstra;
use crate::greedy::Greedy;
use crate::route::RouteResult;
use crate::traits::Search;

// ---------------------------------------------------------------------------
// StrategyKind
// ---------------------------------------------------------------------------

/// Identifies one of the six searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    AStar,
    Dijkstra,
    Bfs,
    Greedy,
    Beam,
    Backtracking,
}

impl StrategyKind {
    /// Every strategy, in menu order.
    pub const ALL: [StrategyKind; 6] = [
        Self::AStar,
        Self::Dijkstra,
        Self::Bfs,
        Self::Greedy,
        Self::Beam,
        Self::Backtracking,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Greedy => "Greedy BFS",
            Self::Beam => "Beam Search",
            Self::Backtracking => "Backtracking",
        }
    }

    /// One-line description for selection menus.
    pub const fn description(self) -> &'static str {
        match self {
            Self::AStar => "Shortest route, balancing distance travelled against distance left.",
            Self::Dijkstra => "Shortest route by distance travelled alone.",
            Self::Bfs => "Fewest steps, expanding outward ring by ring.",
            Self::Greedy => "Heads straight for the goal; quick, not always shortest.",
            Self::Beam => "Keeps only the few most promising routes; fast, may find nothing.",
            Self::Backtracking => "Depth-first with backtracking; can wander on large maps.",
        }
    }

    /// Whether the strategy always returns a shortest route when one exists.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::AStar | Self::Dijkstra | Self::Bfs)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy \u{201c}{0}\u{201d}")]
pub struct ParseStrategyError(pub String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "a*" | "astar" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" => Ok(Self::Bfs),
            "greedy" | "greedybfs" | "greedybestfirst" => Ok(Self::Greedy),
            "beam" | "beamsearch" => Ok(Self::Beam),
            "backtrack" | "backtracking" | "dfs" => Ok(Self::Backtracking),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// A configured search, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    AStar(AStar),
    Dijkstra(Dijkstra),
    Bfs(Bfs),
    Greedy(Greedy),
    Beam(Beam),
    Backtracking(Backtrack),
}

impl Strategy {
    /// The strategy for `kind`, using `beam` and `backtrack` for the two
    /// bounded searches.
    pub fn from_kind(kind: StrategyKind, beam: Beam, backtrack: Backtrack) -> Self {
        match kind {
            StrategyKind::AStar => Self::AStar(AStar),
            StrategyKind::Dijkstra => Self::Dijkstra(Dijkstra),
            StrategyKind::Bfs => Self::Bfs(Bfs),
            StrategyKind::Greedy => Self::Greedy(Greedy),
            StrategyKind::Beam => Self::Beam(beam),
            StrategyKind::Backtracking => Self::Backtracking(backtrack),
        }
    }

    /// All six strategies in menu order.
    pub fn lineup(beam: Beam, backtrack: Backtrack) -> [Strategy; 6] {
        StrategyKind::ALL.map(|k| Self::from_kind(k, beam, backtrack))
    }

    /// The tag of this strategy.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::AStar(_) => StrategyKind::AStar,
            Self::Dijkstra(_) => StrategyKind::Dijkstra,
            Self::Bfs(_) => StrategyKind::Bfs,
            Self::Greedy(_) => StrategyKind::Greedy,
            Self::Beam(_) => StrategyKind::Beam,
            Self::Backtracking(_) => StrategyKind::Backtracking,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Self::from_kind(kind, Beam::default(), Backtrack::default())
    }
}

impl Search for Strategy {
    fn find(&self, grid: &Grid, start: Position, goal: Position) -> RouteResult {
        match self {
            Self::AStar(s) => s.find(grid, start, goal),
            Self::Dijkstra(s) => s.find(grid, start, goal),
            Self::Bfs(s) => s.find(grid, start, goal),
            Self::Greedy(s) => s.find(grid, start, goal),
            Self::Beam(s) => s.find(grid, start, goal),
            Self::Backtracking(s) => s.find(grid, start, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("a_star".parse(), Ok(StrategyKind::AStar));
        assert_eq!("Greedy-Best-First".parse(), Ok(StrategyKind::Greedy));
        assert_eq!("BEAM_SEARCH".parse(), Ok(StrategyKind::Beam));
        assert_eq!("dfs".parse(), Ok(StrategyKind::Backtracking));
        assert_eq!(
            "teleport".parse::<StrategyKind>(),
            Err(ParseStrategyError("teleport".into()))
        );
    }

    #[test]
    fn lineup_keeps_menu_order_and_config() {
        let lineup = Strategy::lineup(Beam::new(5), Backtrack::new(2.0, 3.0));
        let kinds: Vec<StrategyKind> = lineup.iter().map(Strategy::kind).collect();
        assert_eq!(kinds, StrategyKind::ALL.to_vec());
        assert_eq!(lineup[4], Strategy::Beam(Beam::new(5)));
        assert_eq!(lineup[5], Strategy::Backtracking(Backtrack::new(2.0, 3.0)));
    }

    #[test]
    fn optimal_flags() {
        let optimal: Vec<StrategyKind> = StrategyKind::ALL
            .into_iter()
            .filter(|k| k.is_optimal())
            .collect();
        assert_eq!(
            optimal,
            vec![StrategyKind::AStar, StrategyKind::Dijkstra, StrategyKind::Bfs]
        );
    }

    #[test]
    fn dispatch_matches_direct_call() {
        let grid = Grid::parse("....\n.##.\n....").unwrap();
        let (start, goal) = (Position::new(0, 0), Position::new(2, 3));
        assert_eq!(
            Strategy::from(StrategyKind::AStar).find(&grid, start, goal),
            AStar.find(&grid, start, goal)
        );
        assert_eq!(
            Strategy::from(StrategyKind::Backtracking).find(&grid, start, goal),
            Backtrack::default().find(&grid, start, goal)
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::StepCommand;

    #[test]
    fn kinds_use_snake_case() {
        assert_eq!(serde_json::to_string(&StrategyKind::AStar).unwrap(), "\"a_star\"");
        let back: StrategyKind = serde_json::from_str("\"backtracking\"").unwrap();
        assert_eq!(back, StrategyKind::Backtracking);
    }

    #[test]
    fn route_and_steps_serialize() {
        let grid = Grid::open(2, 3).unwrap();
        let r = AStar.find(&grid, Position::new(0, 0), Position::new(1, 2));
        let json = serde_json::to_string(&r).unwrap();
        let back: RouteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        let steps = crate::to_steps(&r.path).unwrap();
        let json = serde_json::to_string(&steps).unwrap();
        let back: Vec<StepCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, steps);
    }
}
