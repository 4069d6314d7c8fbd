//! Property tests for whole-document scans.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use serde_yaml_ng::Value;

use pinwarden::application::ScanUseCase;
use pinwarden::domain::ports::DocumentSource;
use pinwarden::domain::value_objects::{AllowList, ScanPolicy};
use pinwarden::error::PinwardenResult;
use pinwarden::infrastructure::{parse_document, MemoryReporter};
use pinwarden::scan_document;

const SHA: &str = "8e8c483db84b4bee98b60c0593521ed34d9990e8";

fn reference() -> impl Strategy<Value = String> {
    let name = proptest::string::string_regex("[a-z]{1,6}/[a-z]{1,6}").unwrap();
    let qualifier = prop_oneof![
        Just(SHA.to_string()),
        Just("v1".to_string()),
        Just("main".to_string()),
    ];
    (name, qualifier).prop_map(|(name, q)| format!("{name}@{q}"))
}

fn workflow() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::collection::vec(reference(), 0..4), 1..4).prop_map(
        |jobs| {
            let mut doc = String::from("jobs:\n");
            for (i, steps) in jobs.iter().enumerate() {
                doc.push_str(&format!("  job{i}:\n    steps:\n"));
                if steps.is_empty() {
                    doc.push_str("      - run: echo\n");
                }
                for step in steps {
                    doc.push_str(&format!("      - uses: {step}\n"));
                }
            }
            doc
        },
    )
}

struct SingleDocument(String);

impl DocumentSource for SingleDocument {
    fn load(&self, path: &Path) -> PinwardenResult<Value> {
        parse_document(path, &self.0)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning the same document twice gives identical results.
    #[test]
    fn property_scan_is_idempotent(doc in workflow(), dry_run in any::<bool>()) {
        let value: Value = serde_yaml_ng::from_str(&doc).unwrap();
        let policy = ScanPolicy::new(AllowList::empty(), dry_run);
        let path = Path::new("ci.yml");

        let mut first = MemoryReporter::new();
        let mut second = MemoryReporter::new();
        let a = scan_document(&value, path, &policy, &mut first);
        let b = scan_document(&value, path, &policy, &mut second);

        prop_assert_eq!(a, b);
        prop_assert_eq!(first.events(), second.events());
    }

    /// PROPERTY: the file flag is the OR of its reference verdicts.
    #[test]
    fn property_file_flag_folds_findings(doc in workflow()) {
        let value: Value = serde_yaml_ng::from_str(&doc).unwrap();
        let policy = ScanPolicy::new(AllowList::empty(), false);
        let report = scan_document(&value, Path::new("ci.yml"), &policy, &mut MemoryReporter::new());

        let any_violation = report.findings.iter().any(|f| f.evaluation.is_violation());
        prop_assert_eq!(report.has_violations, any_violation);
    }

    /// PROPERTY: only an enforcing run with violations fails.
    #[test]
    fn property_verdict_requires_enforcement(doc in workflow(), dry_run in any::<bool>()) {
        let policy = ScanPolicy::new(AllowList::empty(), dry_run);
        let use_case = ScanUseCase::new(SingleDocument(doc));
        let outcome = use_case
            .run(
                vec![Ok(PathBuf::from("ci.yml"))],
                &policy,
                &mut MemoryReporter::new(),
            )
            .unwrap();

        let fails = outcome.verdict(&policy).is_err();
        prop_assert_eq!(fails, !dry_run && outcome.has_violations);
    }
}
