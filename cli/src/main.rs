use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use todo_cli::{execute, Cli, TerminalUi, UreqTransport};
use todo_core::{AppError, TodoApp};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let cli = Cli::parse();
    let command = cli.command();
    let config = cli.config();
    tracing::debug!(base_url = %config.base_url, toggle = ?config.toggle, "starting");

    let ui = TerminalUi::stdio(command.output_format(), command.assume_yes());
    let mut app = TodoApp::new(&config, UreqTransport::new(cli.timeout()), ui);

    Ok(match execute(&mut app, &command) {
        Ok(()) | Err(AppError::Cancelled) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
