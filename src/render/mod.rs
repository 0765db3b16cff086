pub mod matrix;
pub mod mean;
pub mod style;

pub use matrix::{ChartView, PlainChart};
pub use mean::{Band, MeanHighlight};
pub use style::{Bar, Cell, Scatter, Style, StyleKind, bar, scatter};
