//! IO-free client core for a todo REST collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and drives the four user
//! operations of a todo front end through `TodoApp`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoApp` owns the request sequencing and talks to the outside world
//!   only through the `Transport` and `Ui` traits.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use app::{TodoApp, Ui};
pub use client::TodoClient;
pub use config::{ClientConfig, ToggleStrategy};
pub use error::{ApiError, AppError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{NewTodo, Todo, TodoForm, TodoId, TodoPatch};
pub use view::{render_html, render_text, ListView, TodoRow};
