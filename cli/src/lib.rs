//! Terminal front end for a todo REST collection.
//!
//! Wires `todo-core`'s `TodoApp` to a ureq transport and a stdout/stderr
//! `Ui`. Each invocation performs one user operation and prints the list.

pub mod cli;
pub mod terminal;
pub mod transport;

pub use cli::{execute, Cli, Command};
pub use terminal::{OutputFormat, TerminalUi};
pub use transport::UreqTransport;
