//! Chart construction parameters + fluent builder.

use crate::{
    core::{constants::DEFAULT_HEIGHT, error::ConfigError},
    render::{
        matrix::PlainChart,
        style::{Bar, Style},
    },
};

/// Fluent builder; validation happens in `build`, together with the values.
#[derive(Clone, Debug)]
pub struct ChartBuilder<S = Bar> {
    height: usize,
    style: S,
}

impl ChartBuilder {
    pub(crate) fn new() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            style: Bar,
        }
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Style> ChartBuilder<S> {
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }

    /// Swap the cell style; any `Fn(&ChartView, f64, usize) -> Cell` works.
    #[inline]
    #[must_use]
    pub fn style<T: Style>(self, style: T) -> ChartBuilder<T> {
        ChartBuilder {
            height: self.height,
            style,
        }
    }

    /// # Errors
    /// See [`PlainChart::with_style`].
    pub fn build(&self, values: impl Into<Vec<f64>>) -> Result<PlainChart, ConfigError> {
        PlainChart::with_style(values, self.height, &self.style)
    }
}
