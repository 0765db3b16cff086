//! Per-cell styling.
//!
//! A style decides the token drawn at one `(value, level)` position. The
//! chart calls it `values.len() * height` times during construction and keeps
//! whatever it returns; tokens may be plain glyphs or markup-wrapped strings.

use std::{borrow::Cow, fmt};

use clap::ValueEnum;

use crate::{
    core::constants::{BAR_GLYPH, EMPTY_CELL, SCATTER_GLYPH},
    render::{matrix::ChartView, mean::MeanHighlight},
};

/// One rendered token of the grid.
pub type Cell = Cow<'static, str>;

/// Decides the token of a single cell.
pub trait Style {
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell;
}

impl<F> Style for F
where
    F: Fn(&ChartView<'_>, f64, usize) -> Cell,
{
    #[inline]
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
        self(chart, value, level)
    }
}

/// Solid column from the baseline up to the scaled value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bar;

impl Style for Bar {
    #[inline]
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
        bar(chart, value, level)
    }
}

/// One marker per column, at the scaled value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scatter;

impl Style for Scatter {
    #[inline]
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
        scatter(chart, value, level)
    }
}

#[must_use]
pub fn bar(chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
    Cow::Borrowed(if level <= chart.scale(value) {
        BAR_GLYPH
    } else {
        EMPTY_CELL
    })
}

#[must_use]
pub fn scatter(chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
    Cow::Borrowed(if level == chart.scale(value) {
        SCATTER_GLYPH
    } else {
        EMPTY_CELL
    })
}

/// Built-in styles, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StyleKind {
    #[default]
    Bar,
    Scatter,
    /// Bars split at the mean, as HTML `<span>` cells.
    MeanHtml,
    /// Bars split at the mean, as ANSI-coloured cells.
    MeanAnsi,
}

impl StyleKind {
    pub const ALL: [StyleKind; 4] = [Self::Bar, Self::Scatter, Self::MeanHtml, Self::MeanAnsi];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Scatter => "scatter",
            Self::MeanHtml => "mean-html",
            Self::MeanAnsi => "mean-ansi",
        }
    }

    /// Whether cells carry their own colour and must not be tinted again.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        matches!(self, Self::MeanHtml | Self::MeanAnsi)
    }
}

impl Style for StyleKind {
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
        match self {
            Self::Bar => bar(chart, value, level),
            Self::Scatter => scatter(chart, value, level),
            Self::MeanHtml => MeanHighlight::html().cell(chart, value, level),
            Self::MeanAnsi => MeanHighlight::ansi().cell(chart, value, level),
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
