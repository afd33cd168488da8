//! `taskpad list` command.

use crate::session::Session;
use crate::sync::Order;
use crate::task::Task;

/// Execute the `list` command.
///
/// Fetches the requested page and prints an ID / NAME / DESCRIPTION table in
/// server order.
///
/// # Errors
///
/// Returns an error string when the fetch fails.
pub async fn run(session: &mut Session, page: u32, limit: u32, order: Order) -> Result<(), String> {
    session.sync_mut().list(page, limit, order).await.map_err(|e| e.to_string())?;
    print_tasks(session.sync().store().tasks());
    Ok(())
}

/// Prints the task table, or a placeholder line when the list is empty.
pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }

    let id_width = tasks.iter().map(|t| t.id.len()).max().unwrap_or(2).max(2);
    let name_width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(4).max(4);

    println!("{:<id_width$}  {:<name_width$}  DESCRIPTION", "ID", "NAME");
    for task in tasks {
        println!(
            "{:<id_width$}  {:<name_width$}  {}",
            task.id, task.name, task.description,
        );
    }
    println!("\n{} task(s).", tasks.len());
}
