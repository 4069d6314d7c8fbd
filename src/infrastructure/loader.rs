//! Document loading
//!
//! Reads a pipeline file and parses it into a generic YAML value. Shape
//! detection happens later, in the walker.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::domain::ports::DocumentSource;
use crate::error::{PinwardenError, PinwardenResult};

/// Loads documents from the local filesystem.
///
/// Relative paths are resolved against `root`; errors keep the path as given.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for FsDocumentSource {
    fn load(&self, path: &Path) -> PinwardenResult<Value> {
        let content =
            fs::read_to_string(self.root.join(path)).map_err(|source| PinwardenError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        parse_document(path, &content)
    }
}

/// Parse already-read content; `path` is only used for error context
pub fn parse_document(path: &Path, content: &str) -> PinwardenResult<Value> {
    // An empty file parses to null, which the walker reports as unrecognized.
    serde_yaml_ng::from_str(content).map_err(|source| PinwardenError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
