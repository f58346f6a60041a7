//! The todo front end controller.
//!
//! # Design
//! `TodoApp` sequences the four user operations (list, create, toggle,
//! delete) over two host seams: a `Transport` that performs HTTP round trips
//! and a `Ui` that displays results. Each operation is one linear run of
//! request/response pairs. On success a write is followed by a full list
//! reload; on failure the error is logged, surfaced to the user, and the
//! displayed list is left untouched.
//!
//! Operations do not coordinate with each other and nothing is cached, so
//! two overlapping operations on the same todo resolve as last write wins.

use tracing::{debug, error, info};

use crate::client::TodoClient;
use crate::config::{ClientConfig, ToggleStrategy};
use crate::error::{ApiError, AppError};
use crate::http::Transport;
use crate::types::{NewTodo, Todo, TodoForm, TodoId, TodoPatch};
use crate::view::ListView;

pub const EMPTY_TITLE_ALERT: &str = "Please enter a title for your todo";
pub const CREATE_FAILED_ALERT: &str = "Failed to add todo. Please try again.";
pub const TOGGLE_FAILED_ALERT: &str = "Failed to update todo status. Please try again.";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete todo. Please try again.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this todo?";

/// Display surface driven by `TodoApp`.
pub trait Ui {
    /// Replace the list area with `view`.
    fn render(&mut self, view: &ListView);

    /// Blocking, user-visible message for failed writes.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Clear the "add todo" inputs after a successful submission.
    fn reset_form(&mut self);
}

pub struct TodoApp<T, U> {
    client: TodoClient,
    toggle_strategy: ToggleStrategy,
    transport: T,
    ui: U,
}

impl<T: Transport, U: Ui> TodoApp<T, U> {
    pub fn new(config: &ClientConfig, transport: T, ui: U) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            toggle_strategy: config.toggle,
            transport,
            ui,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_parts(self) -> (T, U) {
        (self.transport, self.ui)
    }

    /// Fetch the whole collection and redraw the list.
    ///
    /// Failures are shown inline in the list area and never retried.
    pub fn load(&mut self) -> Result<Vec<Todo>, AppError> {
        self.ui.render(&ListView::Loading);
        match self.fetch_all() {
            Ok(todos) => {
                debug!(count = todos.len(), "loaded todos");
                self.ui.render(&ListView::from_todos(&todos));
                Ok(todos)
            }
            Err(e) => {
                error!(error = %e, "error fetching todos");
                self.ui.render(&ListView::load_failed());
                Err(e.into())
            }
        }
    }

    /// Validate the form, create the todo, then reload and clear the form.
    pub fn submit(&mut self, form: &TodoForm) -> Result<Todo, AppError> {
        let new = match form.validate() {
            Ok(new) => new,
            Err(e) => {
                debug!("rejected submission with empty title");
                self.ui.alert(EMPTY_TITLE_ALERT);
                return Err(e.into());
            }
        };

        let created = self
            .create(&new)
            .map_err(|e| self.write_failed("error adding todo", CREATE_FAILED_ALERT, e))?;
        info!(id = %created.id, "added todo");

        // A failed reload is already shown inline; the todo itself was created.
        let _ = self.load();
        self.ui.reset_form();
        Ok(created)
    }

    /// Flip the completion state of `id`, then reload.
    pub fn toggle(&mut self, id: &TodoId) -> Result<Todo, AppError> {
        let result = match self.toggle_strategy {
            ToggleStrategy::ReadModifyWrite => self.toggle_read_modify_write(id),
            ToggleStrategy::Server => self.toggle_on_server(id),
        };
        let updated = result
            .map_err(|e| self.write_failed("error updating todo status", TOGGLE_FAILED_ALERT, e))?;
        info!(id = %updated.id, completed = updated.completed, "toggled todo");

        let _ = self.load();
        Ok(updated)
    }

    /// Delete `id` after the user confirms, then reload.
    pub fn delete(&mut self, id: &TodoId) -> Result<(), AppError> {
        if !self.ui.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "delete cancelled");
            return Err(AppError::Cancelled);
        }

        let request = self.client.build_delete_todo(id);
        self.transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_todo(response))
            .map_err(|e| self.write_failed("error deleting todo", DELETE_FAILED_ALERT, e))?;
        info!(%id, "deleted todo");

        let _ = self.load();
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.transport.execute(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    fn create(&self, new: &NewTodo) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(new)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_todo(response)
    }

    /// Read the current state, then write the inverse. Not atomic: a change
    /// made elsewhere between the two calls is overwritten.
    fn toggle_read_modify_write(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let response = self.transport.execute(self.client.build_get_todo(id))?;
        let current = self.client.parse_get_todo(response)?;

        let patch = TodoPatch::completed(!current.completed);
        let response = self.transport.execute(self.client.build_update_todo(id, &patch)?)?;
        self.client.parse_update_todo(response)
    }

    fn toggle_on_server(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let response = self.transport.execute(self.client.build_toggle_todo(id))?;
        self.client.parse_toggle_todo(response)
    }

    fn write_failed(&mut self, context: &str, alert: &str, e: ApiError) -> AppError {
        error!(error = %e, "{context}");
        self.ui.alert(alert);
        e.into()
    }
}
