//! Reporter adapters
//!
//! Every adapter implements [`Reporter`]. [`OutputReporter`] is the
//! runtime choice made by the CLI once the output format is resolved.

mod console;
mod github;
mod json;
mod memory;

use std::io::Stdout;
use std::path::Path;

use serde::Serialize;

pub use console::ConsoleReporter;
pub use github::{github_actions_annotation, AnnotationLevel, GithubReporter};
pub use json::{write_typed_event, CompleteEvent, JsonReporter, StartEvent};
pub use memory::MemoryReporter;

use crate::domain::ports::Reporter;
use crate::domain::value_objects::Severity;

/// Concrete output format after `auto` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    Github,
    Console { color: bool },
    Json,
}

/// Stdout reporter selected at runtime
pub enum OutputReporter {
    Github(GithubReporter<Stdout>),
    Console(ConsoleReporter<Stdout>),
    Json(JsonReporter<Stdout>),
}

impl OutputReporter {
    pub fn new(kind: ReporterKind) -> Self {
        match kind {
            ReporterKind::Github => Self::Github(GithubReporter::stdout()),
            ReporterKind::Console { color } => Self::Console(ConsoleReporter::stdout(color)),
            ReporterKind::Json => Self::Json(JsonReporter::stdout()),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Write a command-level event. Only the JSON stream carries these.
    pub fn emit<T: Serialize>(&mut self, event: &T) {
        if let Self::Json(reporter) = self {
            reporter.emit(event);
        }
    }

    fn inner(&mut self) -> &mut dyn Reporter {
        match self {
            Self::Github(r) => r,
            Self::Console(r) => r,
            Self::Json(r) => r,
        }
    }
}

impl Reporter for OutputReporter {
    fn start_group(&mut self, title: &str) {
        self.inner().start_group(title);
    }

    fn end_group(&mut self) {
        self.inner().end_group();
    }

    fn log(&mut self, severity: Severity, message: &str, file: Option<&Path>) {
        self.inner().log(severity, message, file);
    }
}
