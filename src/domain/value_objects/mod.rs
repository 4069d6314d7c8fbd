//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod allow_list;
mod config_warning;
mod reference;
mod scan_policy;
mod severity;

pub use allow_list::AllowList;
pub use config_warning::ConfigWarning;
pub use reference::{Reference, DIGEST_MARKER, DOCKER_PREFIX};
pub use scan_policy::ScanPolicy;
pub use severity::Severity;
