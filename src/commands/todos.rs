//! Todos command for displaying task lists
//!
//! Implements the `tdl todos` command: runs the todos query with optional
//! text and priority filters and renders the result.

use crate::error::CliResult;
use crate::output::format_todos;
use clap::Args;
use todolists_db::{Database, DbError, GetTodosQuery, TodosVm};
use tokio_util::sync::CancellationToken;

/// Show every task list with its (filtered) items
#[derive(Debug, Args)]
pub struct TodosCommand {
    /// Only show items whose title contains this text ("none" disables)
    #[arg(long)]
    pub text: Option<String>,

    /// Only show items with this priority code ("none" disables)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Hide soft-deleted lists and items
    #[arg(long)]
    pub exclude_deleted: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl TodosCommand {
    /// Build the query from the command options.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidFilter` if `--priority` is not an integer
    /// or `none`.
    pub fn build_query(&self) -> Result<GetTodosQuery, DbError> {
        let query = GetTodosQuery::from_filters(self.text.as_deref(), self.priority.as_deref())?;
        Ok(if self.exclude_deleted {
            query.excluding_deleted()
        } else {
            query
        })
    }

    /// Run the query and return the raw view model.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the filters are invalid, the store fails, or
    /// the operation is cancelled.
    pub async fn fetch(
        &self,
        db: &Database,
        cancel: &CancellationToken,
    ) -> Result<TodosVm, DbError> {
        let query = self.build_query()?;
        db.todos(&query, cancel).await
    }

    /// Execute the todos command and render its output.
    pub async fn execute(&self, db: &Database, cancel: &CancellationToken) -> CliResult<String> {
        let vm = self.fetch(db, cancel).await?;

        if self.json {
            Ok(serde_json::to_string_pretty(&vm)?)
        } else {
            Ok(format_todos(&vm))
        }
    }
}
