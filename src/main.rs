//! Clientele CLI - client and order analytics

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = clientele::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
