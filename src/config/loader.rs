//! Configuration loading
//!
//! Files are found in this order and the first one present wins:
//! `<root>/.pinwarden.toml`, then `<config_dir>/pinwarden/config.toml`.
//! Environment overrides are applied on top of whichever was loaded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AllowList, ConfigWarning};
use crate::error::{PinwardenError, PinwardenResult};

use super::env_validator::EnvVarValidator;
use super::types::{Config, OutputFormat};

pub const PROJECT_CONFIG_FILE: &str = ".pinwarden.toml";

/// Allow-list inputs, highest priority first
const ALLOWLIST_VARS: &[&str] = &["INPUT_ALLOWLIST", "PINWARDEN_ALLOWLIST"];
/// Dry-run inputs, highest priority first
const DRY_RUN_VARS: &[&str] = &["INPUT_DRY_RUN", "PINWARDEN_DRY_RUN"];
const FORMAT_VARS: &[&str] = &["PINWARDEN_FORMAT"];

/// Configuration plus everything worth telling the user about it
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, if any
    pub source: Option<PathBuf>,
    /// Unknown keys in the loaded file
    pub warnings: Vec<ConfigWarning>,
    /// Rejected environment values
    pub env_warnings: Vec<String>,
}

/// Load one config file, collecting unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> PinwardenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| PinwardenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PinwardenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project config, then the user config, then defaults,
/// and apply environment overrides.
pub fn load(project_root: &Path) -> PinwardenResult<LoadedConfig> {
    let user_dir = dirs::config_dir().map(|d| d.join("pinwarden"));
    let loaded = load_from_files(project_root, user_dir.as_deref())?;
    Ok(with_env_overrides(loaded, |key| std::env::var(key).ok()))
}

/// File layers only; `user_dir` is the `pinwarden` directory itself.
pub fn load_from_files(
    project_root: &Path,
    user_dir: Option<&Path>,
) -> PinwardenResult<LoadedConfig> {
    let candidates = std::iter::once(project_root.join(PROJECT_CONFIG_FILE))
        .chain(user_dir.map(|d| d.join("config.toml")));

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&candidate)?;
        tracing::debug!(file = %candidate.display(), "loaded configuration");
        return Ok(LoadedConfig {
            config,
            source: Some(candidate),
            warnings,
            env_warnings: Vec::new(),
        });
    }

    tracing::debug!("no configuration file found, using defaults");
    Ok(LoadedConfig::default())
}

/// Apply environment overrides read through `get_env`.
///
/// Empty values count as unset. Invalid values keep the configured
/// setting and add a warning.
pub fn with_env_overrides(
    mut loaded: LoadedConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> LoadedConfig {
    let first_set = |keys: &[&'static str]| {
        keys.iter().find_map(|&key| {
            get_env(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
    };

    if let Some((key, value)) = first_set(ALLOWLIST_VARS) {
        tracing::debug!(var = key, "allow-list taken from environment");
        loaded.config.scan.allowlist = AllowList::from_multiline(&value);
    }

    if let Some((key, value)) = first_set(DRY_RUN_VARS) {
        // Only the exact string `true` enables dry-run.
        let validator = EnvVarValidator::new(key, &["true", "false"]);
        loaded.config.scan.dry_run = match validator.parse(&value, parse_bool) {
            Ok(dry_run) => dry_run,
            Err(warning) => {
                loaded.env_warnings.push(warning);
                false
            }
        };
    }

    if let Some((key, value)) = first_set(FORMAT_VARS) {
        let validator = EnvVarValidator::new(key, &["auto", "github", "console", "json"]);
        match validator.parse(&value, OutputFormat::parse) {
            Ok(format) => loaded.config.output.format = format,
            Err(warning) => loaded.env_warnings.push(warning),
        }
    }

    loaded
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scan",
        "allowlist",
        "dry_run",
        "strict_structure",
        "discovery",
        "workflows_dir",
        "actions_dir",
        "action_files_only",
        "output",
        "format",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|&candidate| (candidate, super::env_validator::levenshtein(unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
