//! **faregrid-core**: foundational types for the faregrid route engine.
//!
//! This crate provides the two values every other faregrid crate works
//! with: [`Position`], a (row, column) cell address, and [`Grid`], the
//! immutable walkability matrix that searches run over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Position;
pub use grid::Grid;
