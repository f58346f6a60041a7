//! List view model and its renderers.
//!
//! Every render is a full redraw: a `ListView` is built from the latest
//! fetched collection and nothing is carried over from the previous one.

use std::fmt::Write as _;

use crate::types::{Todo, TodoId};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load todos. Make sure JSON-server is running.";
pub const NO_DESCRIPTION: &str = "No description";

/// What the todo list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items(Vec<TodoRow>),
    Failed(String),
}

impl ListView {
    pub fn from_todos(todos: &[Todo]) -> Self {
        if todos.is_empty() {
            return ListView::Empty;
        }
        ListView::Items(todos.iter().map(TodoRow::from).collect())
    }

    pub fn load_failed() -> Self {
        ListView::Failed(LOAD_FAILED_MESSAGE.to_string())
    }

    /// Rows currently displayed; empty for every non-list state.
    pub fn rows(&self) -> &[TodoRow] {
        match self {
            ListView::Items(rows) => rows,
            _ => &[],
        }
    }
}

/// One displayed todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoRow {
    /// Label of the toggle button.
    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "Undo"
        } else {
            "Complete"
        }
    }
}

impl From<&Todo> for TodoRow {
    fn from(todo: &Todo) -> Self {
        let description = match todo.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            description,
            completed: todo.completed,
        }
    }
}

/// Render the list area as an HTML fragment.
///
/// All server-provided text is escaped, ids included.
pub fn render_html(view: &ListView) -> String {
    match view {
        ListView::Loading => format!(r#"<div class="text-center py-3">{LOADING_MESSAGE}</div>"#),
        ListView::Empty => format!(r#"<div class="text-center py-3">{EMPTY_MESSAGE}</div>"#),
        ListView::Failed(message) => {
            format!(r#"<div class="alert alert-danger">{}</div>"#, escape_html(message))
        }
        ListView::Items(rows) => {
            let mut html = String::new();
            for row in rows {
                let class = if row.completed {
                    "list-group-item todo-item completed-todo"
                } else {
                    "list-group-item todo-item"
                };
                let id = escape_html(&row.id.to_string());
                // Writing into a String cannot fail.
                let _ = write!(
                    html,
                    concat!(
                        r#"<li class="{class}">"#,
                        r#"<div class="todo-content"><h5>{title}</h5>"#,
                        r#"<p class="todo-description mb-0">{description}</p></div>"#,
                        r#"<div class="todo-actions">"#,
                        r#"<button class="btn btn-sm btn-success toggle-btn" data-id="{id}" data-completed="{completed}">{label}</button>"#,
                        r#"<button class="btn btn-sm btn-danger delete-btn" data-id="{id}">Delete</button>"#,
                        r#"</div></li>"#,
                    ),
                    class = class,
                    title = escape_html(&row.title),
                    description = escape_html(&row.description),
                    id = id,
                    completed = row.completed,
                    label = row.action_label(),
                );
            }
            html
        }
    }
}

/// Render the list area as plain text, one line per todo.
pub fn render_text(view: &ListView) -> String {
    match view {
        ListView::Loading => LOADING_MESSAGE.to_string(),
        ListView::Empty => EMPTY_MESSAGE.to_string(),
        ListView::Failed(message) => format!("error: {message}"),
        ListView::Items(rows) => rows
            .iter()
            .map(|row| {
                let mark = if row.completed { 'x' } else { ' ' };
                format!("[{mark}] {}  {} - {}", row.id, row.title, row.description)
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
