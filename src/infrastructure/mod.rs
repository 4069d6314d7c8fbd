//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `discovery` - Finds workflow and action files below a root
//! - `loader` - Reads and parses pipeline files
//! - `reporters/` - Reporter implementations (GitHub, console, JSON, memory)
//! - `terminal` - Terminal capability detection

pub mod discovery;
pub mod loader;
pub mod reporters;
pub mod terminal;

// Re-export for convenience
pub use discovery::{DiscoveryOptions, FileDiscovery};
pub use loader::{parse_document, FsDocumentSource};
pub use reporters::{
    ConsoleReporter, GithubReporter, JsonReporter, MemoryReporter, OutputReporter, ReporterKind,
};
pub use terminal::{detect_capabilities, TerminalCapabilities};
