//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Choosing the reporter for the current environment
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Reporter selection

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{CheckArgs, Cli, ColorWhen, Commands, FormatArg};
pub use factory::create_scan_use_case;
pub use output::resolve_reporter_kind;
