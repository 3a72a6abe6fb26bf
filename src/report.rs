//! Human-readable status lines.
//!
//! Every line starts with a glyph for its status. Output is informational only,
//! not a machine-readable protocol.

use console::style;
use std::io::{self, Write};

/// Status of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    /// Glyph printed in front of the message.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️ ",
            Self::Success => "✅",
            Self::Warning => "⚠️ ",
            Self::Error => "❌",
        }
    }
}

/// Writes status lines to an output stream.
pub struct Reporter<W: Write> {
    out: W,
    styled: bool,
}

impl Reporter<io::Stdout> {
    /// Reporter on stdout, coloured when stdout is a terminal.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            styled: console::colors_enabled(),
        }
    }
}

impl<W: Write> Reporter<W> {
    /// Plain reporter writing into `out`.
    pub fn new(out: W) -> Self {
        Self { out, styled: false }
    }

    pub fn info(&mut self, msg: impl AsRef<str>) {
        self.line(Status::Info, msg.as_ref());
    }

    pub fn success(&mut self, msg: impl AsRef<str>) {
        self.line(Status::Success, msg.as_ref());
    }

    pub fn warning(&mut self, msg: impl AsRef<str>) {
        self.line(Status::Warning, msg.as_ref());
    }

    pub fn error(&mut self, msg: impl AsRef<str>) {
        self.line(Status::Error, msg.as_ref());
    }

    /// Writes an unprefixed line, used for instructions under a status line.
    pub fn plain(&mut self, msg: impl AsRef<str>) {
        self.write(msg.as_ref());
    }

    /// Writes the `---` separator between the header and the run.
    pub fn separator(&mut self) {
        self.write("\n---\n");
    }

    pub fn line(&mut self, status: Status, msg: &str) {
        let styled = style(msg).force_styling(self.styled);
        let text = match status {
            Status::Info => styled.cyan(),
            Status::Success => styled.green(),
            Status::Warning => styled.yellow(),
            Status::Error => styled.red().bold(),
        };
        self.write(&format!("{} {}", status.glyph(), text));
    }

    /// Consumes the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, line: &str) {
        // Status output is best-effort; a closed stdout must not turn into a failure.
        let _ = writeln!(self.out, "{line}");
    }
}
