//! NDJSON reporter
//!
//! One JSON object per line. Commands bracket the stream with a `start`
//! and a `complete` event; the scan itself contributes `group`, `endgroup`
//! and `log` events.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::ports::Reporter;
use crate::domain::value_objects::Severity;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub dry_run: bool,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, dry_run: bool) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            dry_run,
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub files: usize,
    pub references: usize,
    pub violations: usize,
    pub structural_errors: usize,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum StreamEvent<'a> {
    Group {
        title: &'a str,
    },
    EndGroup,
    Log {
        level: Severity,
        message: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
}

/// Write a typed event to a writer as one NDJSON line.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a command-level event (start, complete) into the same stream
    pub fn emit<T: Serialize>(&mut self, event: &T) {
        let _ = write_typed_event(&mut self.out, event);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn start_group(&mut self, title: &str) {
        self.emit(&StreamEvent::Group { title });
    }

    fn end_group(&mut self) {
        self.emit(&StreamEvent::EndGroup);
    }

    fn log(&mut self, severity: Severity, message: &str, file: Option<&Path>) {
        self.emit(&StreamEvent::Log {
            level: severity,
            message,
            file: file.map(|p| p.to_string_lossy().into_owned()),
        });
    }
}
