//! `taskpad add` command.

use crate::session::Session;

/// Execute the `add` command.
///
/// Opens a create draft, fills it from the arguments, and saves. On success
/// the list is refreshed and the success notice printed.
///
/// # Errors
///
/// Returns an error string when validation or the create call fails; the
/// draft semantics (retained on failure) are the session's concern.
pub async fn run(
    session: &mut Session,
    name: &str,
    description: Option<&str>,
) -> Result<(), String> {
    session.open_create();
    session.edit_name(name);
    if let Some(description) = description {
        session.edit_description(description);
    }
    session.save().await.map_err(|e| e.to_string())?;

    if let Some(notice) = session.sync().store().notice() {
        println!("{}", notice.message);
    }
    Ok(())
}
