use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use pinwarden::config::Config;
use pinwarden::domain::entities::{FileReport, ReferenceFinding, ShapeKind};
use pinwarden::domain::ports::{DocumentSource, Reporter};
use pinwarden::domain::services::scan_document;
use pinwarden::infrastructure::{FsDocumentSource, MemoryReporter, OutputReporter};

#[derive(Serialize)]
struct ParsedFileEvent<'a> {
    event: &'static str,
    path: String,
    shape: ShapeKind,
    references: Vec<ParsedReference<'a>>,
}

#[derive(Serialize)]
struct ParsedReference<'a> {
    entry: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<usize>,
    reference: &'a str,
    status: &'static str,
}

impl<'a> From<&'a ReferenceFinding> for ParsedReference<'a> {
    fn from(finding: &'a ReferenceFinding) -> Self {
        Self {
            entry: &finding.entry,
            step: finding.step,
            reference: &finding.reference,
            status: finding.evaluation.label(),
        }
    }
}

/// Print each file's shape and references. Nothing is enforced.
pub fn cmd_parse(
    root: &Path,
    config: &Config,
    files: Vec<PathBuf>,
    reporter: &mut OutputReporter,
) -> Result<()> {
    // Dry-run keeps classification labels without severity escalation.
    let mut policy = config.scan_policy();
    policy.dry_run = true;

    let source = FsDocumentSource::new(root);
    for path in config.pipeline_files(root, files) {
        let path = path?;
        let document = source.load(&path)?;
        let report = scan_document(&document, &path, &policy, &mut MemoryReporter::new());
        render(&report, reporter);
    }
    Ok(())
}

fn render(report: &FileReport, reporter: &mut OutputReporter) {
    if reporter.is_json() {
        reporter.emit(&ParsedFileEvent {
            event: "file",
            path: report.path.display().to_string(),
            shape: report.shape,
            references: report.findings.iter().map(ParsedReference::from).collect(),
        });
        return;
    }

    reporter.start_group(&report.path.display().to_string());
    reporter.info(&format!("shape: {}", report.shape));
    for finding in &report.findings {
        let location = match finding.step {
            Some(step) => format!("{} step {}", finding.entry, step + 1),
            None => finding.entry.clone(),
        };
        reporter.info(&format!(
            "{}: {} ({})",
            location,
            finding.reference,
            finding.evaluation.label()
        ));
    }
    reporter.end_group();
}
