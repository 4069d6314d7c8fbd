//! File Report Entity
//!
//! What one pass of the document walker found in a single file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::policies::Evaluation;

/// Top-level layout of a pipeline document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Workflow with a `jobs` mapping
    JobCollection,
    /// Composite action with a `runs` block
    RunCollection,
    /// Bare sequence of steps
    FlatStepList,
    /// None of the above
    Unrecognized,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::JobCollection => "jobs",
            ShapeKind::RunCollection => "runs",
            ShapeKind::FlatStepList => "steps",
            ShapeKind::Unrecognized => "unrecognized",
        };
        f.write_str(s)
    }
}

/// One evaluated `uses:` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFinding {
    /// Job name, `runs`, or `steps` for flat step lists
    pub entry: String,
    /// Zero-based step index; `None` for a direct `uses` on the entry
    pub step: Option<usize>,
    /// The reference as written
    pub reference: String,
    pub evaluation: Evaluation,
}

/// Per-file scan result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub shape: ShapeKind,
    pub findings: Vec<ReferenceFinding>,
    /// Jobs or steps that were missing `uses`/`steps`
    pub structural_warnings: usize,
    /// The file had no jobs, runs or steps at all
    pub structural_error: bool,
    /// Logical OR of every violation in this file
    pub has_violations: bool,
}

impl FileReport {
    pub fn new(path: &Path, shape: ShapeKind) -> Self {
        Self {
            path: path.to_path_buf(),
            shape,
            findings: Vec::new(),
            structural_warnings: 0,
            structural_error: shape == ShapeKind::Unrecognized,
            has_violations: false,
        }
    }

    pub fn record(&mut self, finding: ReferenceFinding) {
        self.has_violations |= finding.evaluation.is_violation();
        self.findings.push(finding);
    }

    pub fn violations(&self) -> impl Iterator<Item = &ReferenceFinding> {
        self.findings.iter().filter(|f| f.evaluation.is_violation())
    }

    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }
}
