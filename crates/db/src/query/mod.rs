//! The todos query
//!
//! Retrieves every task list through a [`TodoListSource`], filters each
//! list's items by text and priority, orders items by priority (highest
//! first) and lists by title, and attaches the static reference data.

mod filter;

pub use filter::{Filter, NONE_SENTINEL, TextNeedle, parse_priority, parse_text};

use crate::error::{DbError, DbResult};
use crate::models::{TodoItem, TodoList};
use crate::reference;
use crate::repository::{DeletedRecords, TodoListSource};
use crate::view::{TodoItemDto, TodoListDto, TodosVm};
use serde::Deserialize;
use std::cmp::Ordering;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Raw request as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodosRequest {
    /// Title substring, or `"none"`
    #[serde(default)]
    pub text: Option<String>,
    /// Priority code as text, or `"none"`
    #[serde(default)]
    pub priority: Option<String>,
    /// Ask retrieval to drop soft-deleted lists and items
    #[serde(default)]
    pub exclude_deleted: bool,
}

/// A validated todos query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTodosQuery {
    /// Title filter
    pub text: Filter<TextNeedle>,
    /// Priority code filter
    pub priority: Filter<i64>,
    /// Soft-delete handling passed to retrieval
    pub deleted: DeletedRecords,
}

impl TryFrom<&TodosRequest> for GetTodosQuery {
    type Error = DbError;

    fn try_from(request: &TodosRequest) -> DbResult<Self> {
        let mut query = GetTodosQuery::from_filters(
            request.text.as_deref(),
            request.priority.as_deref(),
        )?;
        if request.exclude_deleted {
            query = query.excluding_deleted();
        }
        Ok(query)
    }
}

impl GetTodosQuery {
    /// Create a query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw filter strings.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidFilter` if `priority` is neither `"none"`
    /// nor an integer.
    pub fn from_filters(text: Option<&str>, priority: Option<&str>) -> DbResult<Self> {
        Ok(Self {
            text: parse_text(text),
            priority: parse_priority(priority)?,
            deleted: DeletedRecords::Include,
        })
    }

    /// Only keep items whose title contains `text`
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Filter::Active(TextNeedle::new(text));
        self
    }

    /// Only keep items with the given priority code
    pub fn with_priority(mut self, code: i64) -> Self {
        self.priority = Filter::Active(code);
        self
    }

    /// Drop soft-deleted lists and items during retrieval
    pub fn excluding_deleted(mut self) -> Self {
        self.deleted = DeletedRecords::Exclude;
        self
    }

    /// Run the query against `source`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Cancelled` if `cancel` fires before retrieval
    /// completes, and propagates any retrieval error unchanged.
    pub async fn execute<S>(&self, source: &S, cancel: &CancellationToken) -> DbResult<TodosVm>
    where
        S: TodoListSource,
    {
        let lists = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("todos query cancelled during retrieval");
                return Err(DbError::Cancelled);
            }
            result = source.fetch_lists(self.deleted) => result?,
        };

        Ok(self.assemble(lists))
    }

    /// Filter, sort and project retrieved lists into the view model.
    pub fn assemble(&self, lists: Vec<TodoList>) -> TodosVm {
        let mut projected: Vec<TodoListDto> = lists
            .into_iter()
            .map(|list| {
                let mut items: Vec<TodoItem> = list
                    .items
                    .into_iter()
                    .filter(|item| self.matches(item))
                    .collect();
                items.sort_by(by_priority_desc);

                TodoListDto {
                    id: list.id,
                    title: list.title,
                    colour: list.colour,
                    items: items.into_iter().map(TodoItemDto::from).collect(),
                }
            })
            .collect();
        // Title ignoring case, then exact title, then list id
        projected.sort_by_cached_key(|list| {
            (list.title.to_lowercase(), list.title.clone(), list.id.clone())
        });

        debug!(
            lists = projected.len(),
            items = projected.iter().map(|l| l.items.len()).sum::<usize>(),
            text_filter = self.text.is_active(),
            priority_filter = self.priority.is_active(),
            "assembled todos"
        );

        TodosVm {
            priority_levels: reference::priority_levels(),
            colours: reference::colours(),
            lists: projected,
        }
    }

    /// Whether an item satisfies both the text and the priority filter
    fn matches(&self, item: &TodoItem) -> bool {
        self.text.passes(|needle| needle.is_in(&item.title))
            && self.priority.passes(|code| item.priority == *code)
    }
}

/// Priority descending, then item id ascending
fn by_priority_desc(a: &TodoItem, b: &TodoItem) -> Ordering {
    b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id))
}
