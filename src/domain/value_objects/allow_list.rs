//! Allow-list Value Object
//!
//! Operator-supplied name prefixes exempted from the pinning requirement.

use serde::{Deserialize, Serialize};

/// Ordered set of reference-name prefixes.
///
/// Blank entries are dropped on construction: an empty prefix would match
/// every reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowList(Vec<String>);

impl AllowList {
    /// An allow-list that matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a newline-separated input (`\n` or `\r\n`).
    pub fn from_multiline(input: &str) -> Self {
        Self::from_entries(input.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)))
    }

    /// Build from individual entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// First entry that is a prefix of `name`
    pub fn matching_entry(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|prefix| name.starts_with(prefix))
    }
}

impl From<Vec<String>> for AllowList {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<AllowList> for Vec<String> {
    fn from(list: AllowList) -> Self {
        list.0
    }
}
