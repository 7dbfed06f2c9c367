//! Database schema initialization for todolists
//!
//! Defines the SurrealDB tables for task lists and their items. Items point
//! at their owning list through a record link.

use crate::error::DbError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// SQL statements for schema initialization
mod sql {
    /// Define the todo_list table
    pub const DEFINE_TODO_LIST_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS todo_list SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS title ON todo_list TYPE string;

        DEFINE FIELD IF NOT EXISTS colour ON todo_list TYPE string DEFAULT "White";

        DEFINE FIELD IF NOT EXISTS deleted ON todo_list TYPE bool DEFAULT false;
    "#;

    /// Define the todo_item table
    pub const DEFINE_TODO_ITEM_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS todo_item SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS list ON todo_item TYPE record<todo_list>;

        DEFINE FIELD IF NOT EXISTS title ON todo_item TYPE string;

        DEFINE FIELD IF NOT EXISTS note ON todo_item TYPE option<string>;

        DEFINE FIELD IF NOT EXISTS priority ON todo_item TYPE int DEFAULT 0;

        DEFINE FIELD IF NOT EXISTS done ON todo_item TYPE bool DEFAULT false;

        DEFINE FIELD IF NOT EXISTS deleted ON todo_item TYPE bool DEFAULT false;

        DEFINE INDEX IF NOT EXISTS todo_item_list ON todo_item FIELDS list;
    "#;
}

/// Initialize the database schema.
///
/// This function is idempotent - it can be called multiple times safely
/// as it uses `IF NOT EXISTS` clauses.
///
/// # Errors
///
/// Returns `DbError::Schema` if any schema definition fails.
pub async fn init_schema(client: &Surreal<Db>) -> Result<(), DbError> {
    client
        .query(sql::DEFINE_TODO_LIST_TABLE)
        .await
        .map_err(|e| DbError::Schema(Box::new(e)))?
        .check()
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    client
        .query(sql::DEFINE_TODO_ITEM_TABLE)
        .await
        .map_err(|e| DbError::Schema(Box::new(e)))?
        .check()
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    Ok(())
}
