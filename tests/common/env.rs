//! Test environment builder for isolated Pinwarden runs.
//!
//! Provides `TestEnv` - a temporary repository and home directory, plus
//! helpers to run the `pinwarden` binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the test runner
const ISOLATED_VARS: &[&str] = &[
    "GITHUB_ACTIONS",
    "CI",
    "INPUT_ALLOWLIST",
    "INPUT_DRY_RUN",
    "PINWARDEN_ALLOWLIST",
    "PINWARDEN_DRY_RUN",
    "PINWARDEN_FORMAT",
    "NO_COLOR",
    "RUST_LOG",
];

/// Result of running a Pinwarden CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// stdout parsed as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.lines()
            .into_iter()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid NDJSON line {l}: {e}"))
            })
            .collect()
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated repository with `.github` content and a private home directory.
pub struct TestEnv {
    pub repo_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Empty repository
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.repo_root.path().join(relative)
    }

    pub fn write_repo_file(&self, relative: &str, content: &str) {
        write_file(&self.repo_path(relative), content);
    }

    pub fn write_workflow(&self, name: &str, content: &str) {
        self.write_repo_file(&format!(".github/workflows/{name}"), content);
    }

    pub fn write_action(&self, relative: &str, content: &str) {
        self.write_repo_file(&format!(".github/actions/{relative}"), content);
    }

    /// Run pinwarden from the repository root with console output
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let picks_format = args.contains(&"--format")
            || env_vars
                .iter()
                .any(|(k, _)| matches!(*k, "PINWARDEN_FORMAT" | "GITHUB_ACTIONS"));
        if picks_format {
            self.run_raw(args, env_vars)
        } else {
            let mut with_format = vec!["--format", "console"];
            with_format.extend_from_slice(args);
            self.run_raw(&with_format, env_vars)
        }
    }

    /// Run exactly `args`, letting config files choose the format
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.repo_root.path())
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pinwarden");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    workflows: Vec<(String, String)>,
    actions: Vec<(String, String)>,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn with_workflow(mut self, name: &str, content: &str) -> Self {
        self.workflows.push((name.to_string(), content.to_string()));
        self
    }

    /// `relative` is below `.github/actions`
    pub fn with_action(mut self, relative: &str, content: &str) -> Self {
        self.actions.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            repo_root: TempDir::new().expect("Failed to create repo dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pinwarden")),
        };
        for (name, content) in &self.workflows {
            env.write_workflow(name, content);
        }
        for (relative, content) in &self.actions {
            env.write_action(relative, content);
        }
        if let Some(toml) = &self.project_config {
            env.write_repo_file(".pinwarden.toml", toml);
        }
        env
    }
}
