//! Configuration module for Pinwarden
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (INPUT_*, then PINWARDEN_*)
//! 3. Project config (.pinwarden.toml)
//! 4. User config (~/.config/pinwarden/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load, load_from_files, load_with_warnings, with_env_overrides, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DiscoveryConfig, OutputConfig, OutputFormat, ScanConfig};
