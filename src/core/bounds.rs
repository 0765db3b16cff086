//! Terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{FALLBACK_TERM_HEIGHT, FALLBACK_TERM_WIDTH, PROMPT_ROWS};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(FALLBACK_TERM_WIDTH), Height(FALLBACK_TERM_HEIGHT)))
}

/// Tallest chart that leaves room for the prompt; never below one row.
#[inline]
#[must_use]
pub fn fit_height((_, h): (Width, Height)) -> usize {
    usize::from(h.0).saturating_sub(PROMPT_ROWS).max(1)
}

/// Whether `columns` cells fit on one terminal line.
#[inline]
#[must_use]
pub fn fits_width((w, _): (Width, Height), columns: usize) -> bool {
    columns <= usize::from(w.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_leaves_prompt_rows() {
        assert_eq!(fit_height((Width(80), Height(30))), 28);
        assert_eq!(fit_height((Width(80), Height(1))), 1);
    }

    #[test]
    fn width_check() {
        assert!(fits_width((Width(80), Height(30)), 80));
        assert!(!fits_width((Width(80), Height(30)), 81));
    }
}
