//! Request filters for the todos query
//!
//! Each filter is tri-state: absent, switched off with the `"none"`
//! sentinel, or active with a value.

use crate::error::{DbError, DbResult};

/// Literal that switches a filter off
pub const NONE_SENTINEL: &str = "none";

/// An optional request filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    /// The request did not carry this filter
    Absent,
    /// The request carried the `"none"` sentinel
    Disabled,
    /// The request carried a real value
    Active(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Absent
    }
}

impl<T> Filter<T> {
    /// The active value, if any
    pub fn active(&self) -> Option<&T> {
        match self {
            Filter::Active(value) => Some(value),
            Filter::Absent | Filter::Disabled => None,
        }
    }

    /// Whether this filter constrains the result
    pub fn is_active(&self) -> bool {
        matches!(self, Filter::Active(_))
    }

    /// Evaluate `predicate` against the active value; inactive filters pass.
    pub fn passes(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        self.active().is_none_or(predicate)
    }
}

/// Case-insensitive substring needle for item titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNeedle {
    raw: String,
    folded: String,
}

impl TextNeedle {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The text as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `title` contains this needle, ignoring case
    pub fn is_in(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.folded)
    }
}

/// Interpret a raw text filter.
pub fn parse_text(raw: Option<&str>) -> Filter<TextNeedle> {
    match raw {
        None => Filter::Absent,
        Some(NONE_SENTINEL) => Filter::Disabled,
        Some(text) => Filter::Active(TextNeedle::new(text)),
    }
}

/// Interpret a raw priority filter.
///
/// # Errors
///
/// Returns `DbError::InvalidFilter` if the value is neither the sentinel nor
/// an integer.
pub fn parse_priority(raw: Option<&str>) -> DbResult<Filter<i64>> {
    match raw {
        None => Ok(Filter::Absent),
        Some(NONE_SENTINEL) => Ok(Filter::Disabled),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map(Filter::Active)
            .map_err(|_| DbError::InvalidFilter {
                filter: "priority",
                value: value.to_string(),
                reason: format!("expected an integer priority code or '{}'", NONE_SENTINEL),
            }),
    }
}
