//! Pipeline file discovery
//!
//! Workflows are the YAML files directly inside the workflows directory.
//! Action definitions are the YAML files anywhere below the actions
//! directory. Discovery is lazy: paths are produced as the walk advances.
//! Yielded paths are relative to the discovery root. Symbolic links are
//! followed.

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::error::PinwardenResult;

pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";
pub const DEFAULT_ACTIONS_DIR: &str = ".github/actions";

const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];
const ACTION_FILE_NAMES: &[&str] = &["action.yml", "action.yaml"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub root: PathBuf,
    /// Relative to `root` unless absolute
    pub workflows_dir: PathBuf,
    /// Relative to `root` unless absolute
    pub actions_dir: PathBuf,
    /// Only `action.yml` / `action.yaml` below the actions directory
    pub action_files_only: bool,
}

impl DiscoveryOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            workflows_dir: PathBuf::from(DEFAULT_WORKFLOWS_DIR),
            actions_dir: PathBuf::from(DEFAULT_ACTIONS_DIR),
            action_files_only: false,
        }
    }

    pub fn with_workflows_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workflows_dir = dir.into();
        self
    }

    pub fn with_actions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.actions_dir = dir.into();
        self
    }

    pub fn with_action_files_only(mut self, enabled: bool) -> Self {
        self.action_files_only = enabled;
        self
    }

    pub fn discover(&self) -> FileDiscovery {
        let workflows = walker(&self.root.join(&self.workflows_dir), Some(1));
        let actions = walker(&self.root.join(&self.actions_dir), None);
        FileDiscovery {
            root: self.root.clone(),
            workflows,
            actions,
            action_files_only: self.action_files_only,
        }
    }
}

fn walker(dir: &Path, max_depth: Option<usize>) -> Option<Walk> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "directory not found, skipping");
        return None;
    }
    Some(
        WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(true)
            .max_depth(max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build(),
    )
}

/// Lazy iterator over discovered pipeline files, workflows first
pub struct FileDiscovery {
    root: PathBuf,
    workflows: Option<Walk>,
    actions: Option<Walk>,
    action_files_only: bool,
}

impl Iterator for FileDiscovery {
    type Item = PinwardenResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = match next_match(&mut self.workflows, is_yaml_file) {
            Some(found) => found,
            None => {
                let filter = if self.action_files_only {
                    is_action_file
                } else {
                    is_yaml_file
                };
                next_match(&mut self.actions, filter)?
            }
        };
        Some(found.map(|path| match path.strip_prefix(&self.root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        }))
    }
}

fn next_match(
    walk: &mut Option<Walk>,
    accept: fn(&Path) -> bool,
) -> Option<PinwardenResult<PathBuf>> {
    let iter = walk.as_mut()?;
    for entry in iter.by_ref() {
        match entry {
            Err(e) => return Some(Err(e.into())),
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && accept(entry.path()) {
                    return Some(Ok(entry.into_path()));
                }
            }
        }
    }
    *walk = None;
    None
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| YAML_EXTENSIONS.contains(&e))
}

fn is_action_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| ACTION_FILE_NAMES.contains(&n))
}
