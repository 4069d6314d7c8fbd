//! Domain Entities
//!
//! - `FileReport` - What the walker found in one pipeline file

mod file_report;

pub use file_report::{FileReport, ReferenceFinding, ShapeKind};
