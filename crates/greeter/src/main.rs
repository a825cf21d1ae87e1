use std::process::ExitCode;

use tracing::warn;

fn main() -> ExitCode {
    // stdout carries only the greeting
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(e) = greeter::run() {
        warn!(error = %e, "greeting not delivered");
    }
    ExitCode::SUCCESS
}
