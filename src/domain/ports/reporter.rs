//! Reporter Port
//!
//! Sink for everything a scan has to say: per-file groups and per-finding
//! messages at info, warning or error severity. The scan never reaches for
//! a global logger; a reporter is passed explicitly through every layer.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Severity;

/// A single reported event, as recorded by in-memory sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// A scoped group opened (one per scanned file)
    GroupStarted { title: String },
    /// The innermost open group closed
    GroupEnded,
    /// A message on one of the severity channels
    Message {
        severity: Severity,
        message: String,
        file: Option<PathBuf>,
    },
}

/// Trait for receiving scan output
///
/// Implementations:
/// - GithubReporter: workflow commands for GitHub Actions logs
/// - ConsoleReporter: indented terminal output
/// - JsonReporter: NDJSON event stream
/// - MemoryReporter: records events for tests and debugging
pub trait Reporter {
    /// Open a named group
    fn start_group(&mut self, title: &str);

    /// Close the most recently opened group
    fn end_group(&mut self);

    /// Emit a message, optionally attributed to a file
    fn log(&mut self, severity: Severity, message: &str, file: Option<&Path>);

    fn info(&mut self, message: &str) {
        self.log(Severity::Info, message, None);
    }

    fn warning(&mut self, message: &str, file: Option<&Path>) {
        self.log(Severity::Warning, message, file);
    }

    fn error(&mut self, message: &str, file: Option<&Path>) {
        self.log(Severity::Error, message, file);
    }
}
