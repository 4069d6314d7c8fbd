//! Allow-listed names and digest-pinned container images.

use crate::common::*;

#[test]
fn allow_listed_tag_passes_with_note() {
    let env = TestEnv::builder()
        .with_workflow("ci.yml", WORKFLOW_JOB_USES_TAG)
        .build();

    let result = env.run_with_env(&["check"], &[("INPUT_ALLOWLIST", "actions/checkout")]);

    assert_exit!(result, 0);
    assert_output_contains!(
        result,
        "actions/checkout matched allow-list, ignoring action."
    );
    assert_output_not_contains!(result, "not pinned");
}

#[test]
fn composite_action_with_image_digest_passes() {
    let env = TestEnv::builder()
        .with_action(
            "build/action.yml",
            &composite_action(&[&format!("docker://alpine@sha256:{IMAGE_DIGEST}")]),
        )
        .build();

    let result = env.run(&["check"]);

    assert_exit!(result, 0);
    assert_output_contains!(result, "No issues were found.");
}

#[test]
fn image_tag_without_digest_fails() {
    let env = TestEnv::builder()
        .with_action(
            "build/action.yml",
            &composite_action(&["docker://alpine@3.19"]),
        )
        .build();

    let result = env.run(&["check"]);

    assert_exit!(result, 1);
    assert_output_contains!(
        result,
        "docker://alpine@3.19 is not pinned to a full length commit SHA."
    );
}

#[test]
fn allow_list_does_not_hide_other_owners() {
    let env = TestEnv::builder()
        .with_workflow(
            "ci.yml",
            &workflow_steps(&["actions/checkout@v4", "someone/else@v1"]),
        )
        .build();

    let result = env.run(&["check", "--allowlist", "actions/"]);

    assert_exit!(result, 1);
    assert_output_contains!(result, "someone/else@v1 is not pinned");
    assert_output_not_contains!(result, "actions/checkout@v4 is not pinned");
}
