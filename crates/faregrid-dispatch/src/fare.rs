//! Route pricing.
//!
//! A fare charges a flat base, a rate per explored cell and a rate per move,
//! then applies a floor and rounds to whole units (ties to even).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Flat charge added to every fare.
pub const DEFAULT_BASE: f64 = 5.0;
/// Charge per cell explored by the search.
pub const DEFAULT_PER_NODE: f64 = 0.05;
/// Charge per step along the route.
pub const DEFAULT_PER_MOVE: f64 = 0.5;
/// Lowest fare ever charged for a route.
pub const DEFAULT_MIN_FARE: f64 = 10.0;

/// Price of one option.
///
/// `Unavailable` orders after every amount, so sorting a menu by fare puts
/// options without a route last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Fare {
    Amount(u32),
    Unavailable,
}

impl Fare {
    /// The amount, if the option can be bought.
    #[inline]
    pub fn amount(self) -> Option<u32> {
        match self {
            Self::Amount(a) => Some(a),
            Self::Unavailable => None,
        }
    }

    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Amount(_))
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(a) => write!(f, "{a}"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Pricing rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    pub base: f64,
    pub per_node: f64,
    pub per_move: f64,
    pub min_fare: f64,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            per_node: DEFAULT_PER_NODE,
            per_move: DEFAULT_PER_MOVE,
            min_fare: DEFAULT_MIN_FARE,
        }
    }
}

impl FareConfig {
    /// Price a route of `path_len` cells found after exploring `explored`
    /// cells. An empty route is [`Fare::Unavailable`].
    pub fn price(&self, path_len: usize, explored: usize) -> Fare {
        if path_len == 0 {
            return Fare::Unavailable;
        }
        let moves = (path_len - 1) as f64;
        let raw = self.base + explored as f64 * self.per_node + moves * self.per_move;
        let floored = raw.max(self.min_fare);
        // Saturating float-to-int cast; validated rates keep this in range.
        Fare::Amount(floored.round_ties_even() as u32)
    }
}
