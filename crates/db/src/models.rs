//! Data models for the todolists read model
//!
//! Defines the fixed enumerations (priority levels, colour palette) and the
//! list/item records handed out by the data-access layer.

/// Task priority level
///
/// Items store the numeric code; the declaration order here is the order
/// in which levels are reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityLevel {
    None,
    Low,
    Medium,
    High,
}

impl PriorityLevel {
    /// Every level, in declaration order
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::None,
        PriorityLevel::Low,
        PriorityLevel::Medium,
        PriorityLevel::High,
    ];

    /// Numeric code stored on items
    pub fn code(&self) -> i64 {
        match self {
            PriorityLevel::None => 0,
            PriorityLevel::Low => 1,
            PriorityLevel::Medium => 2,
            PriorityLevel::High => 3,
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::None => "None",
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
        }
    }

    /// Map a stored code back to its level, if it is a known one
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Colour palette for task lists
///
/// The set and the hex codes are a fixed contract: list colours are
/// validated against it elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Grey,
}

impl Colour {
    /// Every palette entry, in display order
    pub const ALL: [Colour; 8] = [
        Colour::White,
        Colour::Red,
        Colour::Orange,
        Colour::Yellow,
        Colour::Green,
        Colour::Blue,
        Colour::Purple,
        Colour::Grey,
    ];

    /// Colour name as shown to clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Colour::White => "White",
            Colour::Red => "Red",
            Colour::Orange => "Orange",
            Colour::Yellow => "Yellow",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::Purple => "Purple",
            Colour::Grey => "Grey",
        }
    }

    /// Hex code, `#RRGGBB`
    pub fn hex_code(&self) -> &'static str {
        match self {
            Colour::White => "#FFFFFF",
            Colour::Red => "#FF5733",
            Colour::Orange => "#FFC300",
            Colour::Yellow => "#FFFF66",
            Colour::Green => "#CCFF99",
            Colour::Blue => "#6666FF",
            Colour::Purple => "#9966CC",
            Colour::Grey => "#999999",
        }
    }

    /// Parse a colour name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|colour| colour.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task belonging to exactly one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Record key of the item
    pub id: String,

    /// Record key of the owning list
    pub list_id: String,

    /// Item title
    pub title: String,

    /// Optional free-form note
    pub note: Option<String>,

    /// Priority code (see [`PriorityLevel::code`])
    pub priority: i64,

    /// Whether the item has been completed
    pub done: bool,

    /// Soft-delete flag
    pub deleted: bool,
}

impl TodoItem {
    /// Create a new item with required fields
    pub fn new(
        id: impl Into<String>,
        list_id: impl Into<String>,
        title: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            title: title.into(),
            note: None,
            priority,
            done: false,
            deleted: false,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mark the item as done
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Set the soft-delete flag
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }
}

/// A named, coloured collection of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    /// Record key of the list
    pub id: String,

    /// List title
    pub title: String,

    /// Colour name, expected to be one of [`Colour::ALL`]
    pub colour: String,

    /// Soft-delete flag
    pub deleted: bool,

    /// Items owned by this list, in store order
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Create a new, empty list
    pub fn new(id: impl Into<String>, title: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            colour: colour.into(),
            deleted: false,
            items: Vec::new(),
        }
    }

    /// Add an item to this list
    pub fn with_item(mut self, item: TodoItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set the soft-delete flag
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// The palette entry for this list's colour, if it is a known one
    pub fn palette_colour(&self) -> Option<Colour> {
        Colour::parse(&self.colour)
    }
}
