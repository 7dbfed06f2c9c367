//! Repository modules for database operations
//!
//! Provides the data-access capability for task lists and its
//! SurrealDB implementation, encapsulating database queries.

mod list;

pub use list::{DeletedRecords, TodoListRepository, TodoListSource};
