//! Dispatcher configuration, loadable from TOML.
//!
//! Every field is optional in the file; missing values fall back to the
//! built-in defaults.
//!
//! ```toml
//! quick_strategy = "a_star"
//! tile_size = 32
//!
//! [fare]
//! base = 5.0
//! per_node = 0.05
//! per_move = 0.5
//! min_fare = 10.0
//!
//! [search]
//! beam_width = 3
//! depth_factor = 1.5
//! calls_factor = 5.0
//! ```

use std::path::Path;

use faregrid_paths::{
    Backtrack, Beam, DEFAULT_BEAM_WIDTH, DEFAULT_CALLS_FACTOR, DEFAULT_DEPTH_FACTOR, Strategy,
    StrategyKind,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fare::FareConfig;

/// Side of one map tile in pixels.
pub const DEFAULT_TILE_SIZE: i32 = 32;

/// Parameters of the two bounded searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub beam_width: usize,
    pub depth_factor: f64,
    pub calls_factor: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            depth_factor: DEFAULT_DEPTH_FACTOR,
            calls_factor: DEFAULT_CALLS_FACTOR,
        }
    }
}

impl SearchConfig {
    pub fn beam(&self) -> Beam {
        Beam::new(self.beam_width)
    }

    pub fn backtrack(&self) -> Backtrack {
        Backtrack::new(self.depth_factor, self.calls_factor)
    }

    /// The configured search for `kind`.
    pub fn strategy(&self, kind: StrategyKind) -> Strategy {
        Strategy::from_kind(kind, self.beam(), self.backtrack())
    }

    /// All six configured searches in menu order.
    pub fn lineup(&self) -> [Strategy; 6] {
        Strategy::lineup(self.beam(), self.backtrack())
    }
}

/// Top-level dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub fare: FareConfig,
    pub search: SearchConfig,
    /// Strategy used by quick routes.
    pub quick_strategy: StrategyKind,
    /// Pixel size of one grid cell, for pixel-based requests.
    pub tile_size: i32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            fare: FareConfig::default(),
            search: SearchConfig::default(),
            quick_strategy: StrategyKind::AStar,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl DispatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded dispatch config from {}", path.display());
        Ok(config)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("fare.base", self.fare.base),
            ("fare.per_node", self.fare.per_node),
            ("fare.per_move", self.fare.per_move),
            ("fare.min_fare", self.fare.min_fare),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{value} is not a non-negative number")));
            }
        }
        if self.search.beam_width == 0 {
            return Err(invalid("search.beam_width", "must be at least 1".into()));
        }
        for (field, value) in [
            ("search.depth_factor", self.search.depth_factor),
            ("search.calls_factor", self.search.calls_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("{value} is not a positive number")));
            }
        }
        if self.tile_size <= 0 {
            return Err(invalid("tile_size", format!("{} is not positive", self.tile_size)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = DispatchConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, DispatchConfig::default());
        assert_eq!(cfg.search.beam(), Beam::default());
        assert_eq!(cfg.search.backtrack(), Backtrack::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = DispatchConfig::from_toml_str(
            r#"
quick_strategy = "dijkstra"

[fare]
per_move = 1.0

[search]
beam_width = 5
"#,
        )
        .unwrap();
        assert_eq!(cfg.quick_strategy, StrategyKind::Dijkstra);
        assert_eq!(cfg.fare.per_move, 1.0);
        assert_eq!(cfg.fare.base, 5.0);
        assert_eq!(cfg.search.beam_width, 5);
        assert_eq!(cfg.search.calls_factor, 5.0);
        assert_eq!(cfg.tile_size, 32);
    }

    #[test]
    fn lineup_uses_configured_bounds() {
        let mut cfg = DispatchConfig::default();
        cfg.search.beam_width = 7;
        assert_eq!(cfg.search.lineup()[4], Strategy::Beam(Beam::new(7)));
        assert_eq!(cfg.search.strategy(StrategyKind::Bfs).kind(), StrategyKind::Bfs);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = DispatchConfig::from_toml_str("[fare]\nper_node = -0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fare.per_node", .. }));
        let err = DispatchConfig::from_toml_str("[search]\nbeam_width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "search.beam_width", .. }));
        let err = DispatchConfig::from_toml_str("tile_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tile_size", .. }));
        let err = DispatchConfig::from_toml_str("[search]\ncalls_factor = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "search.calls_factor", .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            DispatchConfig::from_toml_str("quick_strategy = \"teleport\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(DispatchConfig::from_toml_str("tile_size = ["), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DispatchConfig::load("/nonexistent/faregrid.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
