//! Terminal implementation of the `Ui` seam.
//!
//! The list area is stdout. Alerts, load errors, and confirmation prompts go
//! to stderr so piping `todo html > list.html` stays clean.

use std::io::{self, BufRead, Write};

use todo_core::{render_html, render_text, ListView, Ui};
use tracing::{debug, warn};

/// How the list area is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

pub struct TerminalUi<W, E, R> {
    out: W,
    err: E,
    input: R,
    format: OutputFormat,
    assume_yes: bool,
}

impl TerminalUi<io::Stdout, io::Stderr, io::StdinLock<'static>> {
    pub fn stdio(format: OutputFormat, assume_yes: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), io::stdin().lock(), format, assume_yes)
    }
}

impl<W: Write, E: Write, R: BufRead> TerminalUi<W, E, R> {
    pub fn new(out: W, err: E, input: R, format: OutputFormat, assume_yes: bool) -> Self {
        Self {
            out,
            err,
            input,
            format,
            assume_yes,
        }
    }

    pub fn into_outputs(self) -> (W, E) {
        (self.out, self.err)
    }

    fn emit(result: io::Result<()>) {
        if let Err(e) = result {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write, E: Write, R: BufRead> Ui for TerminalUi<W, E, R> {
    fn render(&mut self, view: &ListView) {
        match view {
            ListView::Loading => debug!("loading todos"),
            ListView::Failed(_) => Self::emit(writeln!(self.err, "{}", render_text(view))),
            _ => {
                let rendered = match self.format {
                    OutputFormat::Text => render_text(view),
                    OutputFormat::Html => render_html(view),
                };
                Self::emit(writeln!(self.out, "{rendered}"));
            }
        }
    }

    fn alert(&mut self, message: &str) {
        Self::emit(writeln!(self.err, "{message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Self::emit(write!(self.err, "{message} [y/N] ").and_then(|_| self.err.flush()));

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    fn reset_form(&mut self) {
        // Arguments are consumed once; there is no form left to clear.
        debug!("form reset");
    }
}
