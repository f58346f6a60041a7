//! Client configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// How a toggle reaches the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleStrategy {
    /// `GET` the todo, then `PATCH` the inverted flag. Works against any
    /// json-server style backend but races with concurrent writers.
    #[default]
    ReadModifyWrite,
    /// `POST /todos/{id}/toggle`; the server flips the flag atomically.
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server root; `/todos` is appended.
    pub base_url: String,
    pub toggle: ToggleStrategy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            toggle: ToggleStrategy::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_toggle(mut self, toggle: ToggleStrategy) -> Self {
        self.toggle = toggle;
        self
    }
}
