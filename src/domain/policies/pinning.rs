//! Pinning Policy
//!
//! Classifies a single `uses:` reference and turns the classification into
//! a verdict under a [`ScanPolicy`].
//!
//! Decision order (first match wins):
//! 1. no `@` qualifier: not checked
//! 2. qualifier is a full-length hash: pinned
//! 3. name matches an allow-list prefix: exempt
//! 4. otherwise: violation

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::{AllowList, Reference, ScanPolicy, Severity};

// Word boundaries are ASCII-only: a non-ASCII letter next to the run
// still counts as a boundary.

/// 40 hex digits, the length of a git commit SHA-1
static COMMIT_SHA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)[0-9a-f]{40}(?-u:\b)").expect("static commit regex")
});

/// 64 hex digits, the length of a SHA-256 image digest
static IMAGE_DIGEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)[0-9a-f]{64}(?-u:\b)").expect("static digest regex")
});

/// True iff `raw` is non-empty and carries an `@` version qualifier.
pub fn has_version_qualifier(raw: &str) -> bool {
    !raw.is_empty() && raw.contains('@')
}

/// True iff the reference is pinned to an immutable content identifier.
///
/// Container references are checked for a 64-hex digest after `sha256:`;
/// a missing marker means the image is not pinned. Everything else is
/// checked for a 40-hex commit in the qualifier. Both checks search for a
/// word-delimited run rather than requiring the whole string to match.
pub fn is_immutable_pin(reference: &Reference) -> bool {
    if reference.is_container() {
        return reference
            .digest()
            .is_some_and(|digest| IMAGE_DIGEST.is_match(digest));
    }

    COMMIT_SHA.is_match(reference.qualifier())
}

/// True iff some allow-list entry is a prefix of the reference name.
pub fn matches_allow_list(reference: &Reference, allow_list: &AllowList) -> bool {
    allow_list.matching_entry(reference.name()).is_some()
}

/// Outcome of evaluating one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No `@` qualifier; out of scope
    Unqualified,
    /// Pinned to a commit SHA or image digest
    Pinned,
    /// Exempted by an allow-list entry
    AllowListed { name: String },
    /// Mutable qualifier, not exempted
    Violation { message: String, severity: Severity },
}

impl Evaluation {
    pub fn is_violation(&self) -> bool {
        matches!(self, Evaluation::Violation { .. })
    }

    /// Message to report for this outcome, with its severity
    pub fn message(&self) -> Option<(Severity, String)> {
        match self {
            Evaluation::Unqualified | Evaluation::Pinned => None,
            Evaluation::AllowListed { name } => Some((
                Severity::Info,
                format!("{} matched allow-list, ignoring action.", name),
            )),
            Evaluation::Violation { message, severity } => Some((*severity, message.clone())),
        }
    }

    /// Short machine-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Evaluation::Unqualified => "unqualified",
            Evaluation::Pinned => "pinned",
            Evaluation::AllowListed { .. } => "allow-listed",
            Evaluation::Violation { .. } => "unpinned",
        }
    }
}

/// Evaluate one raw `uses:` value under `policy`.
pub fn evaluate(raw: &str, policy: &ScanPolicy) -> Evaluation {
    if !has_version_qualifier(raw) {
        return Evaluation::Unqualified;
    }
    let Some(reference) = Reference::parse(raw) else {
        return Evaluation::Unqualified;
    };

    if is_immutable_pin(&reference) {
        return Evaluation::Pinned;
    }

    if matches_allow_list(&reference, &policy.allow_list) {
        return Evaluation::AllowListed {
            name: reference.name().to_string(),
        };
    }

    Evaluation::Violation {
        message: format!("{} is not pinned to a full length commit SHA.", reference),
        severity: policy.violation_severity(),
    }
}
