//! Pinwarden - checks that CI pipelines pin their external actions
//!
//! Pinwarden scans GitHub workflow files and composite-action definitions,
//! extracts every `uses` reference and requires it to point at an immutable
//! revision: a full-length commit SHA, or a `sha256:` digest for container
//! images. Mutable tags and branches fail the run unless allow-listed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ScanOutcome, ScanUseCase};
pub use config::Config;
pub use domain::entities::{FileReport, ReferenceFinding, ShapeKind};
pub use domain::policies::{evaluate, Evaluation};
pub use domain::ports::Reporter;
pub use domain::services::scan_document;
pub use domain::value_objects::{AllowList, Reference, ScanPolicy, Severity};
pub use error::{PinwardenError, PinwardenResult};
