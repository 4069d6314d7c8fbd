//! Plain terminal reporter
//!
//! Prints one header line per group and indents the messages inside it.
//! Severity labels are coloured when colour is enabled.

use std::io::{self, Write};
use std::path::Path;

use crate::domain::ports::Reporter;
use crate::domain::value_objects::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    depth: usize,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn start_group(&mut self, title: &str) {
        let indent = "  ".repeat(self.depth);
        let header = self.paint(BOLD, title);
        let _ = writeln!(self.out, "{}{}", indent, header);
        self.depth += 1;
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn log(&mut self, severity: Severity, message: &str, _file: Option<&Path>) {
        let indent = "  ".repeat(self.depth);
        let line = match severity {
            Severity::Info => message.to_string(),
            Severity::Warning => format!("{} {}", self.paint(YELLOW, "warning:"), message),
            Severity::Error => format!("{} {}", self.paint(RED, "error:"), message),
        };
        let _ = writeln!(self.out, "{}{}", indent, line);
    }
}
