use faregrid_core::Position;
use faregrid_paths::{ContractViolation, StrategyKind};

/// Which end of a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors reported by the [`Dispatcher`](crate::Dispatcher).
///
/// Everything except [`DispatchError::Contract`] is an expected, recoverable
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// An endpoint lies outside the grid or on a blocked cell.
    #[error("{which} {pos} is outside the map or blocked")]
    InvalidEndpoint { which: Endpoint, pos: Position },

    /// The strategy finished without reaching the goal.
    #[error("{strategy} found no route from {start} to {goal}")]
    NoRouteFound {
        strategy: StrategyKind,
        start: Position,
        goal: Position,
    },

    /// The wallet refused the deduction.
    #[error("insufficient funds: fare {fare}, balance {balance}")]
    InsufficientFunds { fare: u32, balance: u32 },

    /// `commit`, `cancel` or `close` was called with no menu on offer.
    #[error("no options are being presented")]
    NotPresenting,

    /// The option index is past the end of the menu.
    #[error("no option at index {0}")]
    UnknownOption(usize),

    /// The chosen option has no route and cannot be bought.
    #[error("{0} has no route to offer")]
    OptionUnavailable(StrategyKind),

    /// A search produced a route that breaks the search contract.
    #[error("{strategy} produced an invalid route: {violation}")]
    Contract {
        strategy: StrategyKind,
        violation: ContractViolation,
    },
}

/// Errors loading or validating a [`DispatchConfig`](crate::DispatchConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
