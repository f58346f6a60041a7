//! Domain DTOs for the todo API.
//!
//! # Design
//! Servers disagree on the shape of ids: json-server hands out integers in
//! older releases and strings in newer ones, the bundled mock server uses
//! UUID strings. `TodoId` accepts both and renders back verbatim into URLs.
//! These types are defined independently of the mock-server crate; the
//! integration tests catch schema drift between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Server-assigned identifier of a todo, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TodoId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TodoId::from(s))
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Int(n)
    }
}

/// Only canonical decimals become `Int`, so `"0042"` or `"+5"` keep their
/// exact text and still address the same URL.
impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => TodoId::Int(n),
            _ => TodoId::Text(s.to_string()),
        }
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for a partial update. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// A patch that only sets the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

/// Raw contents of the "add todo" form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
}

impl TodoForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Trim both fields and turn the form into a submission payload.
    ///
    /// New todos are always submitted with `completed = false`.
    pub fn validate(&self) -> Result<NewTodo, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(NewTodo {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            completed: false,
        })
    }
}
