//! Client-facing view model returned by the todos query
//!
//! These shapes are distinct from the stored records in [`crate::models`]:
//! they drop storage-only fields such as the soft-delete flag and carry the
//! field names clients expect once serialized.

use crate::models::TodoItem;
use serde::Serialize;

/// Result of the todos query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodosVm {
    /// Every known priority level, in declaration order
    pub priority_levels: Vec<PriorityLevelDto>,
    /// The full colour palette
    pub colours: Vec<ColourDto>,
    /// Filtered lists, ordered by title
    pub lists: Vec<TodoListDto>,
}

/// A priority level as reported to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityLevelDto {
    pub value: i64,
    pub name: String,
}

/// A palette entry as reported to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourDto {
    pub colour: String,
    #[serde(rename = "colorCode")]
    pub color_code: String,
}

/// Projection of a task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListDto {
    pub id: String,
    pub title: String,
    pub colour: String,
    /// Filtered items, highest priority first
    pub items: Vec<TodoItemDto>,
}

/// Projection of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: String,
    pub list_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub priority: i64,
    pub done: bool,
}

impl From<TodoItem> for TodoItemDto {
    fn from(item: TodoItem) -> Self {
        TodoItemDto {
            id: item.id,
            list_id: item.list_id,
            title: item.title,
            note: item.note,
            priority: item.priority,
            done: item.done,
        }
    }
}
