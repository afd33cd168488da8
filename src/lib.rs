//! Core library entry for the `taskpad` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ports;
pub mod session;
pub mod store;
pub mod sync;
pub mod task;

use clap::Parser;

pub use error::Error;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails. Help and version requests print to stdout and succeed.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return Err(err.to_string()),
        Err(err) => {
            print!("{err}");
            return Ok(());
        }
    };
    commands::dispatch(&cli.command).await
}

#[cfg(test)]
mod tests {
    use super::run;

    #[tokio::test]
    async fn run_errors_on_unknown_subcommand() {
        let result = run(["taskpad", "unknown"]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_succeeds_on_help() {
        let result = run(["taskpad", "--help"]).await;
        assert!(result.is_ok());
    }
}
