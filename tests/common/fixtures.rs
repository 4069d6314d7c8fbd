//! Reusable pipeline documents.

/// 40 hex characters
pub const COMMIT_SHA: &str = "8e8c483db84b4bee98b60c0593521ed34d9990e8";

/// 64 hex characters
pub const IMAGE_DIGEST: &str = "2a8f1b9c0d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f90";

pub const UNPINNED_MESSAGE: &str = "actions/checkout@v4 is not pinned to a full length commit SHA.";

pub const RUN_FAILED_MESSAGE: &str =
    "At least one pipeline references an unpinned external action version.";

/// A job calling a reusable workflow by tag
pub const WORKFLOW_JOB_USES_TAG: &str = r#"
name: ci
on: push
jobs:
  build:
    uses: actions/checkout@v4
"#;

pub fn workflow_job_uses(reference: &str) -> String {
    format!("on: push\njobs:\n  build:\n    uses: {reference}\n")
}

pub fn workflow_steps(references: &[&str]) -> String {
    let mut doc = String::from("on: push\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n");
    for reference in references {
        doc.push_str(&format!("      - uses: {reference}\n"));
    }
    doc
}

pub fn composite_action(references: &[&str]) -> String {
    let mut doc = String::from("name: setup\nruns:\n  using: composite\n  steps:\n");
    for reference in references {
        doc.push_str(&format!("    - uses: {reference}\n"));
    }
    doc
}

/// Valid YAML with neither `jobs` nor `runs`
pub const NO_STEPS_DOCUMENT: &str = "name: empty\non: push\n";
