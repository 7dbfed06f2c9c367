use std::path::PathBuf;
use thiserror::Error;

/// Database and query error types for todolists
#[derive(Error, Debug)]
pub enum DbError {
    /// Error establishing connection to the database
    #[error("Failed to connect to database at {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: Box<surrealdb::Error>,
    },

    /// Error during schema initialization
    #[error("Failed to initialize database schema: {0}")]
    Schema(#[source] Box<surrealdb::Error>),

    /// Error executing a query
    #[error("Query execution failed")]
    Query(#[source] Box<surrealdb::Error>),

    /// Error with database path (invalid or inaccessible)
    #[error("Invalid database path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Error creating database directory
    #[error("Failed to create database directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request filter could not be interpreted
    #[error("Invalid {filter} filter '{value}': {reason}")]
    InvalidFilter {
        filter: &'static str,
        value: String,
        reason: String,
    },

    /// The caller abandoned the operation before retrieval finished
    #[error("Query was cancelled before the task lists were retrieved")]
    Cancelled,
}

impl From<surrealdb::Error> for DbError {
    fn from(err: surrealdb::Error) -> Self {
        DbError::Query(Box::new(err))
    }
}

impl DbError {
    /// Get the full error message including nested SurrealDB error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            DbError::Query(err) => format!("Query execution failed: {}", err),
            other => other.to_string(),
        }
    }

    /// Whether this error was caused by caller input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, DbError::InvalidFilter { .. })
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error_display() {
        let err = DbError::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid database path: /invalid/path - Directory does not exist"
        );
    }

    #[test]
    fn test_create_directory_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = DbError::CreateDirectory {
            path: PathBuf::from("/root/tdl"),
            source: io_err,
        };
        assert_eq!(
            err.to_string(),
            "Failed to create database directory at /root/tdl: access denied"
        );
    }

    #[test]
    fn test_invalid_filter_error_display() {
        let err = DbError::InvalidFilter {
            filter: "priority",
            value: "abc".to_string(),
            reason: "expected an integer priority code or 'none'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid priority filter 'abc': expected an integer priority code or 'none'"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_cancelled_error_display() {
        let err = DbError::Cancelled;
        assert_eq!(
            err.to_string(),
            "Query was cancelled before the task lists were retrieved"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_full_message_falls_back_to_display() {
        let err = DbError::Cancelled;
        assert_eq!(err.full_message(), err.to_string());
    }

    #[test]
    fn test_db_error_debug() {
        let err = DbError::InvalidPath {
            path: PathBuf::from("/test/path"),
            reason: "test reason message".to_string(),
        };
        let debug_str = format!("{:?}", err);
        assert!(
            debug_str.contains("InvalidPath")
                && debug_str.contains("/test/path")
                && debug_str.contains("test reason message"),
            "Debug output should contain InvalidPath and its field values"
        );
    }
}
