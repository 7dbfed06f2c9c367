//! Task list retrieval
//!
//! Defines the data-access capability the query consumes and its
//! SurrealDB-backed implementation.

use crate::error::DbResult;
use crate::models::{TodoItem, TodoList};
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::{debug, trace};

/// How soft-deleted lists and items are treated during retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletedRecords {
    /// Return every record regardless of its `deleted` flag
    #[default]
    Include,
    /// Drop deleted lists, and deleted items from the remaining lists
    Exclude,
}

impl DeletedRecords {
    /// Whether a record with the given `deleted` flag is kept
    pub fn keeps(&self, deleted: bool) -> bool {
        match self {
            DeletedRecords::Include => true,
            DeletedRecords::Exclude => !deleted,
        }
    }
}

/// Read-only access to all task lists together with their items
pub trait TodoListSource {
    /// Fetch every task list with its owned items.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the underlying store fails.
    fn fetch_lists(
        &self,
        deleted: DeletedRecords,
    ) -> impl Future<Output = DbResult<Vec<TodoList>>> + Send;
}

/// In-memory source, mostly useful for callers that already hold the lists
impl TodoListSource for Vec<TodoList> {
    async fn fetch_lists(&self, deleted: DeletedRecords) -> DbResult<Vec<TodoList>> {
        Ok(self
            .iter()
            .filter(|list| deleted.keeps(list.deleted))
            .map(|list| TodoList {
                items: list
                    .items
                    .iter()
                    .filter(|item| deleted.keeps(item.deleted))
                    .cloned()
                    .collect(),
                ..list.clone()
            })
            .collect())
    }
}

/// Internal row type for deserializing lists from SurrealDB
#[derive(Debug, Deserialize)]
struct ListRow {
    id: surrealdb::sql::Thing,
    title: String,
    colour: String,
    #[serde(default)]
    deleted: bool,
}

/// Internal row type for deserializing items from SurrealDB
#[derive(Debug, Deserialize)]
struct ItemRow {
    id: surrealdb::sql::Thing,
    list: surrealdb::sql::Thing,
    title: String,
    note: Option<String>,
    priority: i64,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    deleted: bool,
}

impl ItemRow {
    /// Convert an ItemRow into a TodoItem
    fn into_item(self) -> TodoItem {
        TodoItem {
            id: self.id.id.to_raw(),
            list_id: self.list.id.to_raw(),
            title: self.title,
            note: self.note,
            priority: self.priority,
            done: self.done,
            deleted: self.deleted,
        }
    }
}

/// Repository reading task lists from SurrealDB
pub struct TodoListRepository<'a> {
    client: &'a Surreal<Db>,
}

impl<'a> TodoListRepository<'a> {
    /// Create a new TodoListRepository with the given database client
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self { client }
    }

    /// Build the two SELECT statements for the requested deleted handling
    fn build_queries(deleted: DeletedRecords) -> (String, String) {
        let mut list_query = "SELECT id, title, colour, deleted FROM todo_list".to_string();
        let mut item_query =
            "SELECT id, list, title, note, priority, done, deleted FROM todo_item".to_string();

        if deleted == DeletedRecords::Exclude {
            list_query.push_str(" WHERE deleted = false");
            item_query.push_str(" WHERE deleted = false");
        }

        (list_query, item_query)
    }

    /// Fetch all lists and group their items under them.
    ///
    /// Lists are returned ordered by record key, items within a list likewise,
    /// so repeated calls over unchanged data yield identical output. Items
    /// whose owning list is not part of the result are dropped.
    pub async fn list_all(&self, deleted: DeletedRecords) -> DbResult<Vec<TodoList>> {
        let (list_query, item_query) = Self::build_queries(deleted);
        debug!(?deleted, "fetching task lists");
        trace!(%list_query, %item_query, "task list queries");

        let mut response = self.client.query(&list_query).query(&item_query).await?;
        let list_rows: Vec<ListRow> = response.take(0)?;
        let item_rows: Vec<ItemRow> = response.take(1)?;

        let mut items_by_list: HashMap<String, Vec<TodoItem>> = HashMap::new();
        for row in item_rows {
            let item = row.into_item();
            items_by_list
                .entry(item.list_id.clone())
                .or_default()
                .push(item);
        }

        let mut lists: Vec<TodoList> = list_rows
            .into_iter()
            .map(|row| {
                let id = row.id.id.to_raw();
                let mut items = items_by_list.remove(&id).unwrap_or_default();
                items.sort_by(|a, b| a.id.cmp(&b.id));
                TodoList {
                    id,
                    title: row.title,
                    colour: row.colour,
                    deleted: row.deleted,
                    items,
                }
            })
            .collect();
        lists.sort_by(|a, b| a.id.cmp(&b.id));

        if !items_by_list.is_empty() {
            trace!(
                orphaned_lists = items_by_list.len(),
                "skipping items without a retrieved owning list"
            );
        }
        debug!(count = lists.len(), "fetched task lists");

        Ok(lists)
    }
}

impl TodoListSource for TodoListRepository<'_> {
    async fn fetch_lists(&self, deleted: DeletedRecords) -> DbResult<Vec<TodoList>> {
        self.list_all(deleted).await
    }
}
