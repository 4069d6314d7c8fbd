//! Error types for Pinwarden
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pinwarden operations
pub type PinwardenResult<T> = Result<T, PinwardenError>;

/// Main error type for Pinwarden operations
#[derive(Error, Debug)]
pub enum PinwardenError {
    /// A discovered file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered file is not valid YAML
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Walking a search root failed
    #[error("file discovery failed: {0}")]
    Discovery(#[from] ignore::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// At least one reference is not pinned and the run is enforcing
    #[error("At least one pipeline references an unpinned external action version.")]
    UnpinnedReferences,

    /// At least one file had no recognizable structure and structure is enforced
    #[error("At least one pipeline has no jobs, runs or steps to check.")]
    StructuralErrors,
}
