//! Scan Policy Value Object
//!
//! Flags fixed for the duration of one scan invocation.

use super::{AllowList, Severity};

/// Policy applied to every reference in a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPolicy {
    /// Name prefixes exempted from pinning
    pub allow_list: AllowList,
    /// Report violations as warnings and never fail the run
    pub dry_run: bool,
    /// Fail the run when a file has no jobs, runs or steps
    pub strict_structure: bool,
}

impl ScanPolicy {
    pub fn new(allow_list: AllowList, dry_run: bool) -> Self {
        Self {
            allow_list,
            dry_run,
            strict_structure: false,
        }
    }

    pub fn with_strict_structure(mut self, strict: bool) -> Self {
        self.strict_structure = strict;
        self
    }

    /// Severity used for a pinning violation under this policy
    pub fn violation_severity(&self) -> Severity {
        if self.dry_run {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Severity used for a file with no recognizable structure
    pub fn structural_severity(&self) -> Severity {
        if self.strict_structure && !self.dry_run {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}
