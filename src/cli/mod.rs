mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::{core::error::GraphError, telemetry};

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    let _ = telemetry::init_default_tracing(if cli.debug { "debug" } else { "warn" });

    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a),
        parse::Command::Inline(a) => handlers::inline(&a),
        parse::Command::Styles => handlers::styles(),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
