//! CLI commands for todolists
//!
//! This module contains all subcommand implementations for the tdl CLI.

pub mod reference;
pub mod todos;

pub use reference::{ColoursCommand, LevelsCommand};
pub use todos::TodosCommand;

use crate::error::CliResult;
use clap::Subcommand;
use todolists_db::Database;
use tokio_util::sync::CancellationToken;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all task lists with their items
    Todos(TodosCommand),
    /// Show the priority levels
    Levels(LevelsCommand),
    /// Show the colour palette
    Colours(ColoursCommand),
}

impl Command {
    /// Execute the command with the given database connection.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the command execution fails.
    pub async fn execute(&self, db: &Database, cancel: &CancellationToken) -> CliResult<String> {
        match self {
            Command::Todos(cmd) => cmd.execute(db, cancel).await,
            Command::Levels(cmd) => cmd.execute(),
            Command::Colours(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_command_todos_parses() {
        let cli = TestCli::try_parse_from(["test", "todos"]).unwrap();
        match cli.command {
            Command::Todos(cmd) => {
                assert!(cmd.text.is_none());
                assert!(cmd.priority.is_none());
                assert!(!cmd.exclude_deleted);
                assert!(!cmd.json);
            }
            other => panic!("Expected Todos, got {:?}", other),
        }
    }

    #[test]
    fn test_command_todos_with_filters() {
        let cli = TestCli::try_parse_from([
            "test",
            "todos",
            "--text",
            "shop",
            "-p",
            "2",
            "--exclude-deleted",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Todos(cmd) => {
                assert_eq!(cmd.text, Some("shop".to_string()));
                assert_eq!(cmd.priority, Some("2".to_string()));
                assert!(cmd.exclude_deleted);
                assert!(cmd.json);
            }
            other => panic!("Expected Todos, got {:?}", other),
        }
    }

    #[test]
    fn test_command_todos_accepts_non_numeric_priority_for_query_validation() {
        // Validation happens in the query, not in argument parsing
        let cli = TestCli::try_parse_from(["test", "todos", "--priority", "abc"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_command_levels_and_colours_parse() {
        let cli = TestCli::try_parse_from(["test", "levels", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Levels(LevelsCommand { json: true })));

        let cli = TestCli::try_parse_from(["test", "colours"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Colours(ColoursCommand { json: false })
        ));
    }

    #[test]
    fn test_command_unknown_fails() {
        let cli = TestCli::try_parse_from(["test", "add", "Task"]);
        assert!(cli.is_err());
    }
}
