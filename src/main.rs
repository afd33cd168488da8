//! Binary entrypoint for the `taskpad` CLI.

use std::process::ExitCode;

// All I/O is user-triggered request/response; one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match taskpad::run(std::env::args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
