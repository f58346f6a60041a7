//! Command line surface.

use std::time::Duration;

use clap::{Parser, Subcommand};
use todo_core::config::DEFAULT_BASE_URL;
use todo_core::{AppError, ClientConfig, TodoApp, TodoForm, TodoId, ToggleStrategy, Transport, Ui};

use crate::terminal::OutputFormat;
use crate::transport::DEFAULT_TIMEOUT_SECS;

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Manage todos stored behind a REST API")]
pub struct Cli {
    /// Server root; `/todos` is appended
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Flip completion with `POST /todos/{id}/toggle` instead of read-then-patch
    #[arg(long, env = "TODO_SERVER_TOGGLE", global = true)]
    pub server_toggle: bool,

    /// Give up on a request after this many seconds; 0 waits forever
    #[arg(long, env = "TODO_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every todo (the default)
    List,
    /// Print the list as an HTML fragment
    Html,
    /// Add a todo
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Mark a todo complete, or reopen it
    Toggle { id: TodoId },
    /// Delete a todo after confirmation
    Delete {
        id: TodoId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }

    pub fn config(&self) -> ClientConfig {
        let toggle = if self.server_toggle {
            ToggleStrategy::Server
        } else {
            ToggleStrategy::ReadModifyWrite
        };
        ClientConfig::new(self.api_url.clone()).with_toggle(toggle)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Command {
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Command::Html => OutputFormat::Html,
            _ => OutputFormat::Text,
        }
    }

    pub fn assume_yes(&self) -> bool {
        matches!(self, Command::Delete { yes: true, .. })
    }
}

/// Run one command. Writes reload the list on success, so every command
/// ends by showing the current collection.
pub fn execute<T: Transport, U: Ui>(
    app: &mut TodoApp<T, U>,
    command: &Command,
) -> Result<(), AppError> {
    match command {
        Command::List | Command::Html => app.load().map(drop),
        Command::Add { title, description } => {
            app.submit(&TodoForm::new(title.as_str(), description.as_str())).map(drop)
        }
        Command::Toggle { id } => app.toggle(id).map(drop),
        Command::Delete { id, .. } => app.delete(id),
    }
}
