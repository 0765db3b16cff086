//! Approximate plots of one-dimensional data as a grid of characters.
//!
//! ```
//! use plainchart::PlainChart;
//!
//! let chart = PlainChart::new(vec![1.0, 2.0, 3.0], 10)?;
//! assert_eq!(chart.rows().len(), 10);
//! println!("{}", chart.render("\n"));
//! # Ok::<(), plainchart::ConfigError>(())
//! ```
//!
//! Values are scaled against the largest one and rounded to whole character
//! cells, so the chart is only as accurate as its height allows.

pub mod cli;
pub mod core;
pub mod render;
pub mod telemetry;

pub use crate::core::{
    color::{AnsiCode, colorize},
    config::ChartBuilder,
    constants::DEFAULT_HEIGHT,
    data::{read_values, read_values_from_path},
    error::{ColorError, ConfigError, GraphError, ParseErrorKind, ParseValuesError},
};

pub use crate::render::{
    Band, Bar, Cell, ChartView, MeanHighlight, PlainChart, Scatter, Style, StyleKind, bar,
    scatter,
};

/// One-shot helper: chart `values` with `style` and write it to stdout.
///
/// # Errors
/// Construction errors from [`PlainChart::with_style`] and stdout I/O errors.
pub fn plot_values<S: Style>(values: Vec<f64>, height: usize, style: S) -> Result<(), GraphError> {
    use std::io::Write;

    let chart = PlainChart::builder().height(height).style(style).build(values)?;
    writeln!(std::io::stdout().lock(), "{chart}")?;
    Ok(())
}
