//! DocumentSource port - where pipeline documents come from
//!
//! The scan orchestrator asks for one document at a time. The filesystem
//! implementation lives in the infrastructure layer.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::PinwardenResult;

pub trait DocumentSource {
    /// Read and parse the document at `path`
    fn load(&self, path: &Path) -> PinwardenResult<Value>;
}
