//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::ScanUseCase;
use crate::infrastructure::FsDocumentSource;

/// Type alias for the ScanUseCase reading from the local filesystem
pub type ConcreteScanUseCase = ScanUseCase<FsDocumentSource>;

/// Create a scan use case loading documents from disk below `root`
pub fn create_scan_use_case(root: &Path) -> ConcreteScanUseCase {
    ScanUseCase::new(FsDocumentSource::new(root))
}
