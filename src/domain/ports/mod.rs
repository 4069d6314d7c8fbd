//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod document_source;
pub mod reporter;

pub use document_source::DocumentSource;
pub use reporter::{ReportEvent, Reporter};
