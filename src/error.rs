use thiserror::Error;
use todolists_db::DbError;

/// Errors surfaced by the `tdl` command line
#[derive(Error, Debug)]
pub enum CliError {
    /// Store, query or filter error
    #[error(transparent)]
    Db(#[from] DbError),

    /// Failure rendering JSON output
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Full message including nested store details
    pub fn full_message(&self) -> String {
        match self {
            CliError::Db(err) => err.full_message(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
