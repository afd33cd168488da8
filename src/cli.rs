//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::sync::Order;

/// Top-level CLI parser for `taskpad`.
#[derive(Debug, Parser)]
#[command(name = "taskpad", version, about = "Manage a remote todo list from the terminal")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print the task list.
    List {
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size.
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Sort order.
        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
    },
    /// Create a new task.
    Add {
        /// Task name.
        name: String,
        /// Task description.
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Edit an existing task.
    Edit {
        /// Id of the task to edit.
        id: String,
        /// New task name.
        #[arg(long)]
        name: Option<String>,
        /// New task description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task after confirmation.
    Remove {
        /// Id of the task to delete.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// CLI-facing sort order values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, OrderArg};
    use clap::Parser;

    #[test]
    fn parses_list_defaults() {
        let cli = Cli::parse_from(["taskpad", "list"]);
        let Command::List { page, limit, order } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(page, 1);
        assert_eq!(limit, 10);
        assert_eq!(order, OrderArg::Desc);
    }

    #[test]
    fn parses_add_with_description() {
        let cli = Cli::parse_from(["taskpad", "add", "Buy milk", "--description", "2%"]);
        let Command::Add { name, description } = cli.command else {
            panic!("expected add");
        };
        assert_eq!(name, "Buy milk");
        assert_eq!(description.as_deref(), Some("2%"));
    }

    #[test]
    fn parses_edit_with_partial_fields() {
        let cli = Cli::parse_from(["taskpad", "edit", "1", "--name", "Buy oat milk"]);
        let Command::Edit { id, name, description } = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, "1");
        assert_eq!(name.as_deref(), Some("Buy oat milk"));
        assert!(description.is_none());
    }

    #[test]
    fn parses_remove_with_yes_flag() {
        let cli = Cli::parse_from(["taskpad", "remove", "1", "--yes"]);
        assert!(matches!(cli.command, Command::Remove { yes: true, .. }));
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["taskpad", "add"]).is_err());
    }
}
