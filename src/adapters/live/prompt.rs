//! Live adapter for the `Prompter` port reading from stdin.

use std::io::{self, BufRead, Write};

use crate::ports::prompt::Prompter;

/// Prompter that asks on stdout and reads the answer from stdin.
///
/// Only `y` / `yes` (case-insensitive) count as confirmation; anything else,
/// including an empty line, declines.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        print!("{question} [y/N] ");
        io::stdout().flush().map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("failed to flush prompt: {e}").into()
        })?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).map_err(
            |e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("failed to read answer: {e}").into()
            },
        )?;
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
