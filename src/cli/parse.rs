use clap::{Args, Parser, Subcommand};

use crate::render::style::StyleKind;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "plainchart",
    version,
    about = "Approximate bar and scatter charts as plain text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Emit construction and timing diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plot numbers read from a file
    Plot(PlotArgs),
    /// Plot numbers given on the command line
    Inline(InlineArgs),
    /// Show the built-in styles on a sample series
    Styles,
    /// Print example invocations
    Examples,
}

/// `plainchart plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin); numbers separated by commas or whitespace
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `plainchart inline …`
#[derive(Parser, Debug)]
pub struct InlineArgs {
    /// Values to plot, in order
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Options shared by every plotting subcommand.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Rows available to the tallest value [default: 10]
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Fill the terminal height, or cap `--height` to it
    #[arg(long)]
    pub fit: bool,

    /// Cell style
    #[arg(short, long, value_enum, default_value_t = StyleKind::Bar)]
    pub style: StyleKind,

    /// Row separator; `\n`, `\t` and `\r` escapes are understood
    #[arg(long, default_value = "\\n")]
    pub separator: String,

    /// Tint bar/scatter cells (name or `#RRGGBB`)
    #[arg(short, long)]
    pub color: Option<String>,
}
