//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, colorize};
pub use config::ChartBuilder;
pub use constants::{BAR_GLYPH, DEFAULT_HEIGHT, EMPTY_CELL, SCATTER_GLYPH};
pub use error::{ColorError, ConfigError, GraphError, ParseValuesError};
