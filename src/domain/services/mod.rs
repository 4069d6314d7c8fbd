//! Domain Services
//!
//! Pure business logic services that operate on parsed documents.
//! These services have no I/O dependencies and are easily testable.

mod walker;

pub use walker::{scan_document, DocumentShape};
