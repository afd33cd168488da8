//! `taskpad edit` command.

use crate::session::Session;

/// Execute the `edit` command.
///
/// Fetches the current list to locate the task, opens an update draft
/// prefilled from it, applies the given field overrides, and saves. Fields
/// not overridden keep their current values (the update is a wholesale
/// name+description overwrite on the wire).
///
/// # Errors
///
/// Returns an error string for an unknown id or a failed update.
pub async fn run(
    session: &mut Session,
    id: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<(), String> {
    session.sync_mut().refresh().await.map_err(|e| e.to_string())?;
    session.open_edit(id).map_err(|e| e.to_string())?;
    if let Some(name) = name {
        session.edit_name(name);
    }
    if let Some(description) = description {
        session.edit_description(description);
    }
    session.save().await.map_err(|e| e.to_string())?;

    if let Some(notice) = session.sync().store().notice() {
        println!("{}", notice.message);
    }
    Ok(())
}
