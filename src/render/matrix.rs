//! Value sequence to character-cell matrix.
//!
//! ### Workflow
//! 1. Validate the input eagerly: `height >= 1`, at least one value, every
//!    value finite. Nothing after construction can fail.
//! 2. Take the maximum once; it is the divisor of every scaled value.
//! 3. Ask the style for each `(value, level)` with levels `1..=height`,
//!    producing one column per value, baseline first.
//! 4. Transpose into rows and flip, so row 0 is the top level and the last
//!    row is level 1.
//!
//! Scaling is `round(value * height / max)` with ties going to the even
//! neighbour, clamped to `0..=height`. A non-positive maximum scales every
//! value to 0, which renders as an empty chart.

use std::{cell::OnceCell, fmt};

use tracing::debug;

use crate::{
    core::{config::ChartBuilder, constants::DEFAULT_SEPARATOR, error::ConfigError},
    render::style::{Bar, Cell, Style},
};

/// `value` in levels of a chart `height` rows tall whose tallest value is `max`.
#[inline]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn scale_to_level(value: f64, height: usize, max: f64) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let y = (value * height as f64 / max).round_ties_even();
    if y >= height as f64 {
        height
    } else if y > 0.0 {
        y as usize
    } else {
        // negative, zero and NaN all land on the baseline
        0
    }
}

/// Read-only chart context handed to a [`Style`] for every cell.
pub struct ChartView<'a> {
    values: &'a [f64],
    height: usize,
    max: f64,
    mean: OnceCell<f64>,
}

impl<'a> ChartView<'a> {
    fn new(values: &'a [f64], height: usize, max: f64) -> Self {
        Self {
            values,
            height,
            max,
            mean: OnceCell::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest input value, the scale reference.
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Level reached by `value`, in `0..=height`.
    #[inline]
    #[must_use]
    pub fn scale(&self, value: f64) -> usize {
        scale_to_level(value, self.height, self.max)
    }

    /// Arithmetic mean of the values, computed on first use.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        *self
            .mean
            .get_or_init(|| self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}

impl fmt::Debug for ChartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartView")
            .field("columns", &self.values.len())
            .field("height", &self.height)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

/// Immutable grid of rendered cells, row 0 on top.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainChart {
    values: Vec<f64>,
    height: usize,
    max: f64,
    rows: Vec<Vec<Cell>>,
}

impl PlainChart {
    /// Bar chart of `values`, `height` rows tall.
    ///
    /// # Errors
    /// See [`PlainChart::with_style`].
    pub fn new(values: impl Into<Vec<f64>>, height: usize) -> Result<Self, ConfigError> {
        Self::with_style(values, height, &Bar)
    }

    #[inline]
    #[must_use]
    pub fn builder() -> ChartBuilder {
        ChartBuilder::new()
    }

    /// Build the cell matrix, asking `style` for every cell.
    ///
    /// # Errors
    /// * [`ConfigError::NonPositiveHeight`] when `height` is 0.
    /// * [`ConfigError::EmptyValues`] when there is nothing to scale against.
    /// * [`ConfigError::NonFiniteValue`] for NaN or infinite input.
    pub fn with_style<S: Style + ?Sized>(
        values: impl Into<Vec<f64>>,
        height: usize,
        style: &S,
    ) -> Result<Self, ConfigError> {
        let values = values.into();
        if height == 0 {
            return Err(ConfigError::NonPositiveHeight);
        }
        if values.is_empty() {
            return Err(ConfigError::EmptyValues);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteValue { index });
        }
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let rows = {
            let view = ChartView::new(&values, height, max);
            let mut rows: Vec<Vec<Cell>> =
                (0..height).map(|_| Vec::with_capacity(values.len())).collect();
            for &value in &values {
                // level 1 belongs in the last row
                for (row, level) in rows.iter_mut().rev().zip(1..=height) {
                    row.push(style.cell(&view, value, level));
                }
            }
            rows
        };

        debug!(columns = values.len(), height, max, "built chart matrix");
        Ok(Self {
            values,
            height,
            max,
            rows,
        })
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns, one per value.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Rows of cells, top level first.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Level reached by `value`, in `0..=height`.
    #[inline]
    #[must_use]
    pub fn scale(&self, value: f64) -> usize {
        scale_to_level(value, self.height, self.max)
    }

    /// The context styles saw while this chart was built.
    #[must_use]
    pub fn view(&self) -> ChartView<'_> {
        ChartView::new(&self.values, self.height, self.max)
    }

    /// Linearize the matrix: cells of a row are concatenated as-is, rows are
    /// joined with `separator`.
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        self.rows
            .iter()
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for PlainChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(DEFAULT_SEPARATOR)?;
            }
            for cell in row {
                f.write_str(cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rounds_to_nearest_level() {
        let chart = PlainChart::new(vec![1.0, 2.0, 3.0], 10).unwrap();
        assert_eq!(chart.scale(1.0), 3);
        assert_eq!(chart.scale(2.0), 7);
        assert_eq!(chart.scale(3.0), 10);
    }

    #[test]
    fn ties_go_to_even() {
        // 1 * 2 / 4 == 0.5
        assert_eq!(scale_to_level(1.0, 2, 4.0), 0);
        // 3 * 2 / 4 == 1.5
        assert_eq!(scale_to_level(3.0, 2, 4.0), 2);
        // 5 * 1 / 2 == 2.5, clamped afterwards
        assert_eq!(scale_to_level(5.0, 1, 2.0), 1);
        // 1 * 6 / 4 == 1.5
        assert_eq!(scale_to_level(1.0, 6, 4.0), 2);
        // 5 * 1 / 10 == 0.5
        assert_eq!(scale_to_level(5.0, 1, 10.0), 0);
    }

    #[test]
    fn scale_is_clamped_both_ways() {
        assert_eq!(scale_to_level(11.0, 10, 3.0), 10);
        assert_eq!(scale_to_level(-3.0, 10, 3.0), 0);
        assert_eq!(scale_to_level(f64::NAN, 10, 3.0), 0);
    }

    #[test]
    fn non_positive_max_scales_to_zero() {
        assert_eq!(scale_to_level(0.0, 10, 0.0), 0);
        assert_eq!(scale_to_level(-1.0, 10, -1.0), 0);
        assert_eq!(scale_to_level(-2.0, 10, -1.0), 0);
    }

    #[test]
    fn level_one_is_bottom_row() {
        let chart = PlainChart::new(vec![1.0, 2.0, 3.0], 10).unwrap();
        let rows = chart.rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].concat(), "  ▌");
        assert_eq!(rows[9].concat(), "▌▌▌");
    }

    #[test]
    fn view_mean_is_cached_average() {
        let chart = PlainChart::new(vec![1.0, 2.0, 6.0], 3).unwrap();
        let view = chart.view();
        assert!((view.mean() - 3.0).abs() < f64::EPSILON);
        assert!((view.mean() - 3.0).abs() < f64::EPSILON);
        assert_eq!(view.scale(view.mean()), 2);
    }

    #[test]
    fn display_uses_newlines() {
        let chart = PlainChart::new(vec![1.0, 2.0], 2).unwrap();
        assert_eq!(chart.to_string(), chart.render("\n"));
        assert_eq!(chart.to_string(), " ▌\n▌▌");
    }
}
