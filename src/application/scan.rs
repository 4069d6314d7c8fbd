//! Scan Use Case
//!
//! Drives the walker over a lazy sequence of files and folds the per-file
//! results into one outcome. Files are loaded one at a time; the next file
//! is not touched until the previous walk has returned.

use std::path::PathBuf;

use crate::domain::entities::FileReport;
use crate::domain::ports::{DocumentSource, Reporter};
use crate::domain::services::scan_document;
use crate::domain::value_objects::ScanPolicy;
use crate::error::{PinwardenError, PinwardenResult};

/// Aggregate result of one scan run
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub reports: Vec<FileReport>,
    /// OR of every file's `has_violations`
    pub has_violations: bool,
    /// At least one file had no recognizable structure
    pub has_structural_errors: bool,
}

impl ScanOutcome {
    fn absorb(&mut self, report: FileReport) {
        self.has_violations |= report.has_violations;
        self.has_structural_errors |= report.structural_error;
        self.reports.push(report);
    }

    pub fn files(&self) -> usize {
        self.reports.len()
    }

    pub fn references(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }

    pub fn violations(&self) -> usize {
        self.reports.iter().map(FileReport::violation_count).sum()
    }

    pub fn structural_errors(&self) -> usize {
        self.reports.iter().filter(|r| r.structural_error).count()
    }

    /// Final pass/fail decision for the run.
    ///
    /// Violations fail the run unless it is a dry run. Unrecognized files
    /// fail it only when structure is enforced.
    pub fn verdict(&self, policy: &ScanPolicy) -> PinwardenResult<()> {
        if policy.dry_run {
            return Ok(());
        }
        if self.has_violations {
            return Err(PinwardenError::UnpinnedReferences);
        }
        if policy.strict_structure && self.has_structural_errors {
            return Err(PinwardenError::StructuralErrors);
        }
        Ok(())
    }
}

/// Scan Use Case
///
/// Orchestrates loading and walking every file yielded by discovery.
pub struct ScanUseCase<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> ScanUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Scan every file in order.
    ///
    /// The first discovery, read or parse error aborts the run.
    pub fn run<I>(
        &self,
        files: I,
        policy: &ScanPolicy,
        reporter: &mut dyn Reporter,
    ) -> PinwardenResult<ScanOutcome>
    where
        I: IntoIterator<Item = PinwardenResult<PathBuf>>,
    {
        let mut outcome = ScanOutcome::default();

        for file in files {
            let path = file?;
            let document = self.source.load(&path)?;
            let report = scan_document(&document, &path, policy, reporter);
            tracing::debug!(
                file = %path.display(),
                references = report.findings.len(),
                violations = report.violation_count(),
                "file scanned"
            );
            outcome.absorb(report);
        }

        tracing::info!(
            files = outcome.files(),
            violations = outcome.violations(),
            "scan finished"
        );
        Ok(outcome)
    }
}
