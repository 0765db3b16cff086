//! A collection of constants.

/// Number of character rows used when no height is given.
pub const DEFAULT_HEIGHT: usize = 10;

/// Filled cell of a bar column
pub const BAR_GLYPH: &str = "▌";
/// Single point of a scatter column
pub const SCATTER_GLYPH: &str = "×";
/// Unfilled cell
pub const EMPTY_CELL: &str = " ";

/// Row separator used by `Display` and the CLI default.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Terminal size assumed when it cannot be queried
pub const FALLBACK_TERM_WIDTH: u16 = 80;
/// Terminal size assumed when it cannot be queried
pub const FALLBACK_TERM_HEIGHT: u16 = 30;

/// Rows kept free below a fitted chart (shell prompt).
pub const PROMPT_ROWS: usize = 2;
