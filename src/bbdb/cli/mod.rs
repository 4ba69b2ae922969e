//! Console side of bbdb: mode selection, the stdin loop and rendering.
//!
//! Everything here writes through a [`Console`] so tests can capture output
//! in byte buffers instead of the real stdout/stderr.

pub mod dispatch;
pub mod mode;

use bbdb::commands::{CmdMessage, CmdResult, MessageLevel};
use console::style;
use std::io::{self, Write};

pub use dispatch::process_line;
pub use mode::{run_mode, Mode};

pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
    styled_out: bool,
    styled_err: bool,
}

impl<O: Write, E: Write> Console<O, E> {
    /// Styling is only applied to a stream that is a terminal; listed values
    /// are never styled.
    pub fn new(out: O, err: E, styled_out: bool, styled_err: bool) -> Self {
        Self {
            out,
            err,
            styled_out,
            styled_err,
        }
    }

    pub fn print_result(&mut self, result: &CmdResult) -> io::Result<()> {
        for value in &result.listed_values {
            writeln!(self.out, "{}", value)?;
        }
        for message in &result.messages {
            self.print_message(message)?;
        }
        Ok(())
    }

    fn print_message(&mut self, message: &CmdMessage) -> io::Result<()> {
        if !self.styled_out {
            return writeln!(self.out, "{}", message.content);
        }
        let styled = match message.level {
            MessageLevel::Info => style(&message.content).dim(),
            MessageLevel::Success => style(&message.content).green(),
        };
        writeln!(self.out, "{}", styled.force_styling(true))
    }

    /// Writes `prefix: detail` to stderr.
    pub fn error(&mut self, prefix: &str, detail: &str) -> io::Result<()> {
        let prefix = format!("{}:", prefix);
        if self.styled_err {
            writeln!(
                self.err,
                "{} {}",
                style(prefix).red().bold().force_styling(true),
                detail
            )
        } else {
            writeln!(self.err, "{} {}", prefix, detail)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
