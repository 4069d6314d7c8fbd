//! Document Walker
//!
//! Finds every `uses:` reference in one parsed pipeline document and
//! evaluates it under the scan policy.
//!
//! Three document shapes are recognised, chosen by top-level key presence
//! (never by file name or location):
//! - `jobs:` mapping (workflow); takes precedence over `runs:`
//! - `runs:` block (composite action)
//! - a top-level sequence of steps
//!
//! Each job, or the single runs block, contributes either its direct `uses`
//! or every step's `uses`, in document order. All steps are evaluated even
//! after a violation so that every finding is reported.

use std::path::Path;

use serde_yaml_ng::{Mapping, Sequence, Value};

use crate::domain::entities::{FileReport, ReferenceFinding, ShapeKind};
use crate::domain::policies::evaluate;
use crate::domain::ports::Reporter;
use crate::domain::value_objects::ScanPolicy;

/// Borrowed view of a document's reference-bearing part
#[derive(Debug, Clone, Copy)]
pub enum DocumentShape<'a> {
    JobCollection(&'a Mapping),
    RunCollection(&'a Mapping),
    FlatStepList(&'a Sequence),
    Unrecognized,
}

impl<'a> DocumentShape<'a> {
    /// Detect the shape of a parsed document
    pub fn detect(document: &'a Value) -> Self {
        if let Some(jobs) = document.get("jobs").and_then(Value::as_mapping) {
            return DocumentShape::JobCollection(jobs);
        }
        if let Some(runs) = document.get("runs").and_then(Value::as_mapping) {
            return DocumentShape::RunCollection(runs);
        }
        if let Some(steps) = document.as_sequence() {
            return DocumentShape::FlatStepList(steps);
        }
        DocumentShape::Unrecognized
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            DocumentShape::JobCollection(_) => ShapeKind::JobCollection,
            DocumentShape::RunCollection(_) => ShapeKind::RunCollection,
            DocumentShape::FlatStepList(_) => ShapeKind::FlatStepList,
            DocumentShape::Unrecognized => ShapeKind::Unrecognized,
        }
    }
}

/// Which part of the document an entry came from, for messages
enum Entry<'a> {
    Job(&'a str),
    Runs,
    Steps,
}

impl Entry<'_> {
    fn id(&self) -> &str {
        match self {
            Entry::Job(name) => name,
            Entry::Runs => "runs",
            Entry::Steps => "steps",
        }
    }

    fn describe(&self) -> String {
        match self {
            Entry::Job(name) => format!("the \"{}\" job", name),
            Entry::Runs => "the runs block".to_string(),
            Entry::Steps => "the step list".to_string(),
        }
    }
}

/// Scan one parsed document, reporting into `reporter`.
///
/// The file is wrapped in one reporter group. Returns the per-file report;
/// `has_violations` is the OR of every violation found.
pub fn scan_document(
    document: &Value,
    path: &Path,
    policy: &ScanPolicy,
    reporter: &mut dyn Reporter,
) -> FileReport {
    let shape = DocumentShape::detect(document);
    let mut walk = Walk {
        path,
        policy,
        reporter,
        report: FileReport::new(path, shape.kind()),
    };

    walk.reporter.start_group(&path.display().to_string());
    tracing::debug!(file = %path.display(), shape = %shape.kind(), "scanning document");

    match shape {
        DocumentShape::JobCollection(jobs) => {
            for (key, job) in jobs {
                let name = key_label(key);
                walk.entry(&Entry::Job(&name), job);
            }
        }
        DocumentShape::RunCollection(runs) => {
            walk.entry_mapping(&Entry::Runs, runs);
        }
        DocumentShape::FlatStepList(steps) => {
            walk.steps(&Entry::Steps, steps);
        }
        DocumentShape::Unrecognized => {
            let message = format!(
                "The \"{}\" workflow does not contain any step.",
                path.display()
            );
            let severity = walk.policy.structural_severity();
            walk.reporter.log(severity, &message, Some(path));
        }
    }

    if !walk.report.has_violations && !walk.report.structural_error {
        walk.reporter.info("No issues were found.");
    }
    walk.reporter.end_group();

    walk.report
}

struct Walk<'a, R: Reporter + ?Sized> {
    path: &'a Path,
    policy: &'a ScanPolicy,
    reporter: &'a mut R,
    report: FileReport,
}

impl<R: Reporter + ?Sized> Walk<'_, R> {
    fn entry(&mut self, entry: &Entry<'_>, value: &Value) {
        match value.as_mapping() {
            Some(mapping) => self.entry_mapping(entry, mapping),
            None => self.missing_uses_or_steps(entry),
        }
    }

    fn entry_mapping(&mut self, entry: &Entry<'_>, mapping: &Mapping) {
        if let Some(uses) = mapping.get("uses") {
            self.uses(entry, None, uses);
        } else if let Some(steps) = mapping.get("steps").and_then(Value::as_sequence) {
            self.steps(entry, steps);
        } else {
            self.missing_uses_or_steps(entry);
        }
    }

    fn steps(&mut self, entry: &Entry<'_>, steps: &Sequence) {
        for (index, step) in steps.iter().enumerate() {
            match step.get("uses") {
                Some(uses) => self.uses(entry, Some(index), uses),
                None if step.get("run").is_some() => {
                    tracing::trace!(entry = entry.id(), step = index, "shell step, no reference");
                }
                None => {
                    let message = format!(
                        "Step {} of {} in \"{}\" does not contain uses.",
                        index + 1,
                        entry.describe(),
                        self.path.display()
                    );
                    self.structural_warning(&message);
                }
            }
        }
    }

    fn uses(&mut self, entry: &Entry<'_>, step: Option<usize>, uses: &Value) {
        let Some(raw) = uses.as_str() else {
            let message = format!(
                "The uses value of {} in \"{}\" is not a string.",
                entry.describe(),
                self.path.display()
            );
            self.structural_warning(&message);
            return;
        };

        let evaluation = evaluate(raw, self.policy);
        if let Some((severity, message)) = evaluation.message() {
            let file = evaluation.is_violation().then_some(self.path);
            self.reporter.log(severity, &message, file);
        }

        self.report.record(ReferenceFinding {
            entry: entry.id().to_string(),
            step,
            reference: raw.to_string(),
            evaluation,
        });
    }

    fn missing_uses_or_steps(&mut self, entry: &Entry<'_>) {
        let message = match entry {
            Entry::Job(name) => format!(
                "The \"{}\" job of the \"{}\" workflow does not contain uses or steps.",
                name,
                self.path.display()
            ),
            _ => format!(
                "The runs block of the \"{}\" action does not contain uses or steps.",
                self.path.display()
            ),
        };
        self.structural_warning(&message);
    }

    fn structural_warning(&mut self, message: &str) {
        self.report.structural_warnings += 1;
        self.reporter.warning(message, Some(self.path));
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => "<complex key>".to_string(),
    }
}
