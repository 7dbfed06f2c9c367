//! Database and query layer for todolists
//!
//! Provides SurrealDB connection management with an embedded RocksDB backend,
//! schema initialization, the task list data-access capability and the
//! read-only todos query built on top of it.

pub mod error;
pub mod models;
pub mod query;
pub mod reference;
pub mod repository;
pub mod schema;
pub mod view;

pub use error::{DbError, DbResult};
pub use models::{Colour, PriorityLevel, TodoItem, TodoList};
pub use query::{Filter, GetTodosQuery, NONE_SENTINEL, TextNeedle, TodosRequest};
pub use repository::{DeletedRecords, TodoListRepository, TodoListSource};
pub use view::{ColourDto, PriorityLevelDto, TodoItemDto, TodoListDto, TodosVm};

use std::path::{Path, PathBuf};
use std::process::Command;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use tokio_util::sync::CancellationToken;

/// Default database path relative to project root or current working directory
pub const DEFAULT_DB_PATH: &str = ".tdl/data";

/// Database wrapper providing connection management for SurrealDB
pub struct Database {
    /// The underlying SurrealDB client
    client: Surreal<Db>,
    /// Path where the database is stored, `None` for in-memory databases
    path: Option<PathBuf>,
}

impl Database {
    /// Connect to a SurrealDB database at the specified path.
    ///
    /// Creates the database directory if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the database directory
    ///
    /// # Errors
    ///
    /// Returns `DbError::CreateDirectory` if directory creation fails.
    /// Returns `DbError::Connection` if database connection fails.
    pub async fn connect(path: &Path) -> DbResult<Self> {
        let path = Self::prepare_path(path)?;

        let client =
            Surreal::new::<RocksDb>(path.clone())
                .await
                .map_err(|e| DbError::Connection {
                    path: path.clone(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            client,
            path: Some(path),
        })
    }

    /// Open a fresh in-memory database with the schema already initialized.
    ///
    /// Nothing is persisted; each call returns an independent store.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` or `DbError::Schema` on failure.
    pub async fn in_memory() -> DbResult<Self> {
        let client = Surreal::new::<Mem>(())
            .await
            .map_err(|e| DbError::Connection {
                path: PathBuf::from(":memory:"),
                source: Box::new(e),
            })?;

        let db = Self { client, path: None };
        db.init().await?;
        Ok(db)
    }

    /// Initialize the database schema.
    ///
    /// Selects the todolists namespace and database, then defines the
    /// list and item tables.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Schema` if schema initialization fails.
    pub async fn init(&self) -> DbResult<()> {
        self.client
            .use_ns("todolists")
            .use_db("main")
            .await
            .map_err(|e| DbError::Schema(Box::new(e)))?;

        schema::init_schema(&self.client).await?;

        Ok(())
    }

    /// Get a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<Db> {
        &self.client
    }

    /// Get the path where the database is stored.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Repository for reading task lists
    pub fn lists(&self) -> TodoListRepository<'_> {
        TodoListRepository::new(&self.client)
    }

    /// Run the todos query against this database.
    ///
    /// # Errors
    ///
    /// See [`GetTodosQuery::execute`].
    pub async fn todos(
        &self,
        query: &GetTodosQuery,
        cancel: &CancellationToken,
    ) -> DbResult<TodosVm> {
        query.execute(&self.lists(), cancel).await
    }

    /// Get the default database path based on project root.
    ///
    /// Uses `git rev-parse --show-toplevel` to find the project root and
    /// returns `<project_root>/.tdl/data`. If not in a git repository,
    /// falls back to `.tdl/data` relative to the current working directory.
    pub fn default_path() -> PathBuf {
        let base_path = find_project_root().unwrap_or_else(|| PathBuf::from("."));
        base_path.join(DEFAULT_DB_PATH)
    }

    /// Prepare the database path by validating and creating directories.
    fn prepare_path(path: &Path) -> DbResult<PathBuf> {
        let path = path.to_path_buf();

        if path.as_os_str().is_empty() {
            return Err(DbError::InvalidPath {
                path,
                reason: "path is empty".to_string(),
            });
        }

        if path.is_file() {
            return Err(DbError::InvalidPath {
                path,
                reason: "path points to a file, expected a directory".to_string(),
            });
        }

        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(|e| DbError::CreateDirectory {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(path)
    }
}

// Ensure Database is Send + Sync for async compatibility
static_assertions::assert_impl_all!(Database: Send, Sync);

/// Find the project root by running `git rev-parse --show-toplevel`.
///
/// Returns `Some(PathBuf)` with the absolute path to the git repository root,
/// or `None` if not in a git repository or the command fails.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "{}-{}-{:?}-{}",
            prefix,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn test_default_path() {
        let path = Database::default_path();
        assert!(
            path.ends_with(".tdl/data"),
            "Path should end with .tdl/data, got: {:?}",
            path
        );
    }

    #[test]
    fn test_default_db_path_constant() {
        assert_eq!(DEFAULT_DB_PATH, ".tdl/data");
    }

    #[tokio::test]
    async fn test_connect_and_init() {
        let temp_dir = unique_temp_dir("tdl-test");

        let db = Database::connect(&temp_dir).await;
        assert!(db.is_ok(), "Failed to connect: {:?}", db.err());
        let db = db.unwrap();

        assert_eq!(db.path(), Some(temp_dir.as_path()));

        let init_result = db.init().await;
        assert!(
            init_result.is_ok(),
            "Failed to init: {:?}",
            init_result.err()
        );

        let _ = std::fs::remove_dir_all(&temp_dir);
    }

    #[tokio::test]
    async fn test_connect_creates_directory() {
        let root = unique_temp_dir("tdl-test-nested");
        let temp_dir = root.join("nested/db");

        let db = Database::connect(&temp_dir).await;
        assert!(db.is_ok(), "Failed to connect: {:?}", db.err());
        assert!(temp_dir.exists());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_in_memory_has_no_path() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.path().is_none());
    }

    #[tokio::test]
    async fn test_todos_on_empty_database() {
        let db = Database::in_memory().await.unwrap();

        let vm = db
            .todos(&GetTodosQuery::new(), &CancellationToken::new())
            .await
            .unwrap();

        assert!(vm.lists.is_empty());
        assert_eq!(vm.priority_levels.len(), 4);
        assert_eq!(vm.colours.len(), 8);
    }

    #[test]
    fn test_prepare_path_existing_directory() {
        let temp_dir = env::temp_dir();
        let result = Database::prepare_path(&temp_dir);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), temp_dir);
    }

    #[test]
    fn test_prepare_path_rejects_empty() {
        let result = Database::prepare_path(Path::new(""));
        assert!(matches!(result, Err(DbError::InvalidPath { .. })));
    }

    #[test]
    fn test_prepare_path_rejects_file() {
        let temp_dir = unique_temp_dir("tdl-test-file");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let file = temp_dir.join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let result = Database::prepare_path(&file);
        assert!(matches!(result, Err(DbError::InvalidPath { .. })));

        let _ = std::fs::remove_dir_all(&temp_dir);
    }
}
