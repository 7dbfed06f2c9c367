//! Output formatting module for todolists
//!
//! Provides table formatting and display utilities for CLI output.

use todolists_db::{ColourDto, PriorityLevel, PriorityLevelDto, TodoListDto, TodosVm};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 40;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    let count = s.chars().count();
    if count <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Label for a priority code, falling back to the raw number.
fn priority_label(code: i64) -> String {
    PriorityLevel::from_code(code)
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Format one list as a header line followed by an aligned item table.
fn format_list(list: &TodoListDto) -> String {
    let mut output = format!("{} [{}] ({})\n", list.title, list.colour, list.id);

    if list.items.is_empty() {
        output.push_str("  (no items)");
        return output;
    }

    let headers = ["ID", "Priority", "Done", "Title"];

    let id_width = list
        .items
        .iter()
        .map(|i| i.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let priority_width = list
        .items
        .iter()
        .map(|i| priority_label(i.priority).len())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let done_width = headers[2].len();

    output.push_str(&format!(
        "  {:<id_w$}  {:<priority_w$}  {:<done_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        id_w = id_width,
        priority_w = priority_width,
        done_w = done_width,
    ));

    output.push_str(&format!(
        "  {:->id_w$}  {:->priority_w$}  {:->done_w$}  {:->title_w$}\n",
        "",
        "",
        "",
        "",
        id_w = id_width,
        priority_w = priority_width,
        done_w = done_width,
        title_w = headers[3].len(),
    ));

    for item in &list.items {
        output.push_str(&format!(
            "  {:<id_w$}  {:<priority_w$}  {:<done_w$}  {}\n",
            item.id,
            priority_label(item.priority),
            if item.done { "x" } else { "" },
            truncate(&item.title, MAX_TITLE_WIDTH),
            id_w = id_width,
            priority_w = priority_width,
            done_w = done_width,
        ));
    }

    // Remove trailing newline
    output.pop();

    output
}

/// Format the lists of a todos result, one block per list.
///
/// Produces output in the format:
/// ```text
/// Shopping [Green] (l1)
///   ID  Priority  Done  Title
///   --  --------  ----  -----
///   i2  High            Clean house
/// ```
pub fn format_todos(vm: &TodosVm) -> String {
    if vm.lists.is_empty() {
        return "No task lists found.".to_string();
    }

    vm.lists
        .iter()
        .map(format_list)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format priority levels as a two-column table.
pub fn format_priority_levels(levels: &[PriorityLevelDto]) -> String {
    let name_width = levels
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut output = format!("{:<5}  {:<name_w$}\n", "Value", "Name", name_w = name_width);
    output.push_str(&format!("{:-<5}  {:-<name_w$}\n", "", "", name_w = name_width));
    for level in levels {
        output.push_str(&format!(
            "{:<5}  {:<name_w$}\n",
            level.value,
            level.name,
            name_w = name_width
        ));
    }
    output.pop();
    output
}

/// Format the colour palette as a two-column table.
pub fn format_colours(colours: &[ColourDto]) -> String {
    let name_width = colours
        .iter()
        .map(|c| c.colour.len())
        .max()
        .unwrap_or(0)
        .max("Colour".len());

    let mut output = format!("{:<name_w$}  Hex\n", "Colour", name_w = name_width);
    output.push_str(&format!("{:-<name_w$}  -------\n", "", name_w = name_width));
    for colour in colours {
        output.push_str(&format!(
            "{:<name_w$}  {}\n",
            colour.colour,
            colour.color_code,
            name_w = name_width
        ));
    }
    output.pop();
    output
}
