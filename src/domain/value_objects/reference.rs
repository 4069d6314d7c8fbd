//! Action Reference Value Object
//!
//! A `uses:` string split once into its name and version qualifier.
//! Two forms are recognised:
//! - `owner/repo[/path]@qualifier`
//! - `docker://image@sha256:<digest>`

use std::fmt;

/// Prefix marking a container image reference
pub const DOCKER_PREFIX: &str = "docker://";

/// Marker preceding a container image digest
pub const DIGEST_MARKER: &str = "sha256:";

/// A versioned action reference.
///
/// Only strings carrying an `@` separator parse; unqualified references
/// (local actions, implicit default branches) are outside the check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    raw: String,
    at: usize,
}

impl Reference {
    /// Parse a raw `uses:` value. Returns `None` when there is no `@`.
    pub fn parse(raw: &str) -> Option<Self> {
        let at = raw.find('@')?;
        Some(Self {
            raw: raw.to_string(),
            at,
        })
    }

    /// The full reference as written in the document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Everything before the first `@`
    pub fn name(&self) -> &str {
        &self.raw[..self.at]
    }

    /// Everything after the first `@`
    pub fn qualifier(&self) -> &str {
        &self.raw[self.at + 1..]
    }

    /// Whether this is a `docker://` image reference
    pub fn is_container(&self) -> bool {
        self.raw.starts_with(DOCKER_PREFIX)
    }

    /// Text following the first `sha256:` marker, if any.
    pub fn digest(&self) -> Option<&str> {
        self.raw
            .find(DIGEST_MARKER)
            .map(|idx| &self.raw[idx + DIGEST_MARKER.len()..])
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
