//! A job pinned to a tag, with and without dry-run, and the pinned variant.

use crate::common::*;

const JOB_WITH_TAG: &str = "jobs:\n  build:\n    uses: actions/checkout@v4\n";

#[test]
fn tag_reference_fails_enforcing_run() {
    let env = TestEnv::builder().with_workflow("ci.yml", JOB_WITH_TAG).build();

    let result = env.run(&["check"]);

    assert_exit!(result, 1);
    assert_output_contains!(result, &format!("error: {UNPINNED_MESSAGE}"));
    assert_output_contains!(result, RUN_FAILED_MESSAGE);
}

#[test]
fn tag_reference_only_warns_in_dry_run() {
    let env = TestEnv::builder().with_workflow("ci.yml", JOB_WITH_TAG).build();

    let result = env.run(&["check", "--dry-run"]);

    assert_exit!(result, 0);
    assert_output_contains!(result, &format!("warning: {UNPINNED_MESSAGE}"));
    assert_output_not_contains!(result, "error:");
}

#[test]
fn full_commit_sha_passes() {
    let env = TestEnv::builder()
        .with_workflow(
            "ci.yml",
            &workflow_job_uses(&format!("actions/checkout@{COMMIT_SHA}")),
        )
        .build();

    let result = env.run(&["check"]);

    assert_exit!(result, 0);
    assert_output_not_contains!(result, "not pinned");
}

#[test]
fn every_file_is_reported_before_failing() {
    let env = TestEnv::builder()
        .with_workflow("a.yml", JOB_WITH_TAG)
        .with_workflow("b.yml", &workflow_steps(&["actions/cache@v3"]))
        .build();

    let result = env.run(&["check"]);

    assert_exit!(result, 1);
    assert_output_contains!(result, UNPINNED_MESSAGE);
    assert_output_contains!(
        result,
        "actions/cache@v3 is not pinned to a full length commit SHA."
    );
    assert_eq!(result.combined_output().matches(RUN_FAILED_MESSAGE).count(), 1);
}

#[test]
fn rerun_gives_identical_output() {
    let env = TestEnv::builder()
        .with_workflow("ci.yml", &workflow_steps(&["actions/checkout@v4", "a/b@main"]))
        .build();

    let first = env.run(&["check"]);
    let second = env.run(&["check"]);

    assert_eq!(first.exit_code, second.exit_code);
    assert_eq!(first.stdout, second.stdout);
}
