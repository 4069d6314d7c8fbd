//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{AllowList, ScanPolicy};
use crate::error::PinwardenResult;
use crate::infrastructure::discovery::{
    DiscoveryOptions, DEFAULT_ACTIONS_DIR, DEFAULT_WORKFLOWS_DIR,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GitHub workflow commands under GitHub Actions, console otherwise
    #[default]
    Auto,
    Github,
    Console,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "github" => Some(Self::Github),
            "console" => Some(Self::Console),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Scan policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ScanConfig {
    /// Reference name prefixes exempt from pinning
    #[serde(default)]
    pub allowlist: AllowList,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub strict_structure: bool,
}

/// Where pipeline files are looked for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_workflows_dir")]
    pub workflows_dir: PathBuf,

    #[serde(default = "default_actions_dir")]
    pub actions_dir: PathBuf,

    #[serde(default)]
    pub action_files_only: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            workflows_dir: default_workflows_dir(),
            actions_dir: default_actions_dir(),
            action_files_only: false,
        }
    }
}

fn default_workflows_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WORKFLOWS_DIR)
}

fn default_actions_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ACTIONS_DIR)
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn scan_policy(&self) -> ScanPolicy {
        ScanPolicy::new(self.scan.allowlist.clone(), self.scan.dry_run)
            .with_strict_structure(self.scan.strict_structure)
    }

    pub fn discovery_options(&self, root: impl Into<PathBuf>) -> DiscoveryOptions {
        DiscoveryOptions::new(root)
            .with_workflows_dir(&self.discovery.workflows_dir)
            .with_actions_dir(&self.discovery.actions_dir)
            .with_action_files_only(self.discovery.action_files_only)
    }

    /// Files to scan: `explicit` when given, otherwise discovery below `root`.
    pub fn pipeline_files(
        &self,
        root: &Path,
        explicit: Vec<PathBuf>,
    ) -> Box<dyn Iterator<Item = PinwardenResult<PathBuf>>> {
        if explicit.is_empty() {
            Box::new(self.discovery_options(root).discover())
        } else {
            Box::new(explicit.into_iter().map(Ok))
        }
    }
}
