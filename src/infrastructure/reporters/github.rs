//! GitHub Actions workflow-command reporter
//!
//! Groups become `::group::`/`::endgroup::` pairs; warnings and errors
//! become annotations attributed to the scanned file.

use std::io::{self, Write};
use std::path::Path;

use crate::domain::ports::Reporter;
use crate::domain::value_objects::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = match file {
        Some(file) => format!(" file={}", escape_workflow_command_property(file)),
        None => String::new(),
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Property values additionally escape the separators of the property list.
fn escape_workflow_command_property(s: &str) -> String {
    escape_workflow_command_message(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}

/// Reporter writing GitHub Actions workflow commands
pub struct GithubReporter<W: Write> {
    out: W,
}

impl GithubReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GithubReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for GithubReporter<W> {
    fn start_group(&mut self, title: &str) {
        let _ = writeln!(self.out, "::group::{}", escape_workflow_command_message(title));
    }

    fn end_group(&mut self) {
        let _ = writeln!(self.out, "::endgroup::");
    }

    fn log(&mut self, severity: Severity, message: &str, file: Option<&Path>) {
        let level = match severity {
            Severity::Info => {
                let _ = writeln!(self.out, "{}", message);
                return;
            }
            Severity::Warning => AnnotationLevel::Warning,
            Severity::Error => AnnotationLevel::Error,
        };
        let file = file.map(|p| p.to_string_lossy());
        let _ = writeln!(
            self.out,
            "{}",
            github_actions_annotation(level, message, file.as_deref())
        );
    }
}
