//! `taskpad remove` command.

use crate::ports::prompt::Prompter;
use crate::session::Session;

/// Prompter used for `--yes`: the user confirmed on the command line.
struct PreConfirmed;

impl Prompter for PreConfirmed {
    fn confirm(&self, _question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(true)
    }
}

/// Execute the `remove` command.
///
/// Fetches the current list to locate the task, asks for confirmation
/// (unless `--yes` was given), and deletes. Nothing is dispatched when the
/// user declines.
///
/// # Errors
///
/// Returns an error string for an unknown id or a failed delete.
pub async fn run(
    session: &mut Session,
    id: &str,
    yes: bool,
    prompter: &dyn Prompter,
) -> Result<(), String> {
    session.sync_mut().refresh().await.map_err(|e| e.to_string())?;

    let prompter: &dyn Prompter = if yes { &PreConfirmed } else { prompter };
    let removed = session.remove(id, prompter).await.map_err(|e| e.to_string())?;

    if !removed {
        println!("Cancelled.");
        return Ok(());
    }
    if let Some(notice) = session.sync().store().notice() {
        println!("{}", notice.message);
    }
    Ok(())
}
