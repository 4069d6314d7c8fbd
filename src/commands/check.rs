use std::path::Path;

use anyhow::Result;

use pinwarden::config::Config;
use pinwarden::domain::value_objects::AllowList;
use pinwarden::infrastructure::reporters::{CompleteEvent, StartEvent};
use pinwarden::infrastructure::OutputReporter;
use pinwarden::presentation::{create_scan_use_case, CheckArgs};

pub fn cmd_check(
    root: &Path,
    mut config: Config,
    args: CheckArgs,
    reporter: &mut OutputReporter,
) -> Result<()> {
    apply_overrides(&mut config, &args);
    let policy = config.scan_policy();
    tracing::debug!(
        allow_list = policy.allow_list.len(),
        dry_run = policy.dry_run,
        strict_structure = policy.strict_structure,
        "scan policy"
    );

    reporter.emit(&StartEvent::new("check", policy.dry_run));

    let files = config.pipeline_files(root, args.files);

    let use_case = create_scan_use_case(root);
    let outcome = use_case.run(files, &policy, reporter)?;
    let verdict = outcome.verdict(&policy);

    reporter.emit(&CompleteEvent {
        event: "complete",
        command: "check",
        success: verdict.is_ok(),
        files: outcome.files(),
        references: outcome.references(),
        violations: outcome.violations(),
        structural_errors: outcome.structural_errors(),
    });

    verdict?;
    Ok(())
}

/// CLI flags take precedence over environment and config files
fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    if !args.allowlist.is_empty() {
        config.scan.allowlist = AllowList::from_entries(&args.allowlist);
    }
    config.scan.dry_run |= args.dry_run;
    config.scan.strict_structure |= args.strict_structure;
    if let Some(dir) = &args.workflows_dir {
        config.discovery.workflows_dir = dir.clone();
    }
    if let Some(dir) = &args.actions_dir {
        config.discovery.actions_dir = dir.clone();
    }
    config.discovery.action_files_only |= args.action_files_only;
}
