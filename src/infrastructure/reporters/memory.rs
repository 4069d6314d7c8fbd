//! In-memory reporter

use std::path::Path;

use crate::domain::ports::{ReportEvent, Reporter};
use crate::domain::value_objects::Severity;

/// Records every event in order
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Vec<ReportEvent>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Messages logged at exactly `severity`, in order
    pub fn messages_at(&self, severity: Severity) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Message {
                    severity: s,
                    message,
                    ..
                } if *s == severity => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn start_group(&mut self, title: &str) {
        self.events.push(ReportEvent::GroupStarted {
            title: title.to_string(),
        });
    }

    fn end_group(&mut self) {
        self.events.push(ReportEvent::GroupEnded);
    }

    fn log(&mut self, severity: Severity, message: &str, file: Option<&Path>) {
        self.events.push(ReportEvent::Message {
            severity,
            message: message.to_string(),
            file: file.map(Path::to_path_buf),
        });
    }
}
