//! Bars split at the mean of the series.
//!
//! Each column is drawn in three bands: up to the mean level in the "below"
//! colour, from there up to the column's own level in the "above" colour,
//! and the rest as background. Columns shorter than the mean are therefore
//! still filled to the mean, which makes the mean read as a solid floor.

use std::borrow::Cow;

use crate::{
    core::{
        color::AnsiCode,
        constants::{BAR_GLYPH, EMPTY_CELL},
    },
    render::{
        matrix::ChartView,
        style::{Cell, Style},
    },
};

const HTML_BELOW: &str = "<span style=\"color:green\">▌</span>";
const HTML_ABOVE: &str = "<span style=\"color:red\">▌</span>";
const HTML_BACKGROUND: &str = "<span style=\"color:white\">▌</span>";

/// Which band of a mean-split column a cell falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Below,
    Above,
    Background,
}

impl Band {
    /// Band of `level` in the column of `value`.
    #[must_use]
    pub fn of(chart: &ChartView<'_>, value: f64, level: usize) -> Self {
        if level <= chart.scale(chart.mean()) {
            Self::Below
        } else if level <= chart.scale(value) {
            Self::Above
        } else {
            Self::Background
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Markup {
    Html,
    Ansi,
}

/// Mean-split bar style, as HTML spans or ANSI escapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeanHighlight {
    markup: Markup,
}

impl MeanHighlight {
    /// Cells are `<span style="color:...">` elements; background cells are
    /// white glyphs so every row keeps its width in a proportional page.
    #[must_use]
    pub const fn html() -> Self {
        Self {
            markup: Markup::Html,
        }
    }

    /// Cells are green/red ANSI glyphs; background cells are blank.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            markup: Markup::Ansi,
        }
    }
}

impl Style for MeanHighlight {
    fn cell(&self, chart: &ChartView<'_>, value: f64, level: usize) -> Cell {
        let band = Band::of(chart, value, level);
        match (self.markup, band) {
            (Markup::Html, Band::Below) => Cow::Borrowed(HTML_BELOW),
            (Markup::Html, Band::Above) => Cow::Borrowed(HTML_ABOVE),
            (Markup::Html, Band::Background) => Cow::Borrowed(HTML_BACKGROUND),
            (Markup::Ansi, Band::Below) => Cow::Owned(AnsiCode::green().paint(BAR_GLYPH)),
            (Markup::Ansi, Band::Above) => Cow::Owned(AnsiCode::red().paint(BAR_GLYPH)),
            (Markup::Ansi, Band::Background) => Cow::Borrowed(EMPTY_CELL),
        }
    }
}
