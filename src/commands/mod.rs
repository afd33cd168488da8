//! Command dispatch and handlers.

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;

use crate::adapters::live::{LiveTransport, StdinPrompter};
use crate::cli::Command;
use crate::config::ApiConfig;
use crate::session::Session;
use crate::sync::SyncController;

/// Dispatch a parsed command to its handler.
///
/// Builds the live wiring: environment config, reqwest transport, controller,
/// and session. Handlers own all printing.
///
/// # Errors
///
/// Returns an error string when configuration is missing or the selected
/// command handler fails.
pub async fn dispatch(command: &Command) -> Result<(), String> {
    let config = ApiConfig::from_env()?;
    let transport = LiveTransport::new(&config);
    let mut session = Session::new(SyncController::new(Box::new(transport)));

    match command {
        Command::List { page, limit, order } => {
            list::run(&mut session, *page, *limit, (*order).into()).await
        }
        Command::Add { name, description } => {
            add::run(&mut session, name, description.as_deref()).await
        }
        Command::Edit { id, name, description } => {
            edit::run(&mut session, id, name.as_deref(), description.as_deref()).await
        }
        Command::Remove { id, yes } => remove::run(&mut session, id, *yes, &StdinPrompter).await,
    }
}
