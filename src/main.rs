use std::process::ExitCode;

fn main() -> ExitCode {
    match plainchart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plainchart: {e}");
            ExitCode::FAILURE
        }
    }
}
