use crate::config::Config;
use crate::report::{Check, Severity};
use crate::split::split;

fn checks(text: &str) -> Vec<(Check, String)> {
    split(text, &Config::default())
        .unwrap()
        .quality
        .findings
        .into_iter()
        .map(|f| (f.check, f.location))
        .collect()
}

#[test]
fn test_well_formed_document_is_clean() {
    let run = split("## A\ntext\n### B\nmore\n#### C\n### D\n", &Config::default()).unwrap();
    assert!(run.quality.is_clean());
}

#[test]
fn test_depth_jump_from_section_heading() {
    assert_eq!(
        checks("## A\n#### Deep\ntext\n"),
        vec![(Check::DepthJump, "01-a.md".to_string())]
    );
}

#[test]
fn test_depth_jump_between_subheadings() {
    let run = split("## A\n### B\n##### E\ntext\n", &Config::default()).unwrap();
    let finding = &run.quality.findings[0];
    assert_eq!(finding.check, Check::DepthJump);
    assert_eq!(finding.severity, Severity::Warning);
    assert!(finding.message.contains("from depth 3 to 5"));
    assert!(finding.message.contains("line 3"));
}

#[test]
fn test_empty_section() {
    assert_eq!(
        checks("## A\n\n   \n## B\ntext\n"),
        vec![(Check::EmptySection, "01-a.md".to_string())]
    );
}

#[test]
fn test_duplicate_titles_after_normalisation() {
    let found = checks("## Setup\nx\n## setup!\ny\n");
    assert_eq!(found, vec![(Check::DuplicateTitle, "02-setup-1.md".to_string())]);
}

#[test]
fn test_duplicate_titles_without_alphanumerics() {
    let found = checks("## 🚀\nx\n## 🚀\ny\n## ✨\nz\n");
    assert_eq!(found, vec![(Check::DuplicateTitle, "02-section-1.md".to_string())]);
}

#[test]
fn test_oversized_files_are_info() {
    let cfg = Config {
        size_threshold: 10,
        ..Config::default()
    };
    let run = split("## A\nsome text\n## B\nmore text\n", &cfg).unwrap();
    assert_eq!(run.quality.with_severity(Severity::Info).count(), run.units.len());
    assert_eq!(run.quality.with_severity(Severity::Warning).count(), 0);
    assert!(run
        .quality
        .findings
        .iter()
        .all(|f| f.check == Check::OversizedFile));
}

#[test]
fn test_unclosed_fence() {
    assert_eq!(
        checks("## A\n```\ncode\n"),
        vec![(Check::UnclosedFence, "line 2".to_string())]
    );
}

#[test]
fn test_stray_top_level_heading() {
    let run = split("## A\ntext\n# Other\nmore\n", &Config::default()).unwrap();
    assert_eq!(run.quality.findings.len(), 1);
    let finding = &run.quality.findings[0];
    assert_eq!(finding.check, Check::StrayHeading);
    assert_eq!(finding.location, "01-a.md");
    assert!(finding.message.contains("line 3"));
    assert!(run.units[1].content.contains("# Other\n"));
}

#[test]
fn test_report_display() {
    let run = split("## A\n\n## B\ntext\n", &Config::default()).unwrap();
    assert_eq!(
        run.quality.to_string(),
        "warning: 01-a.md: section 'A' has no content\n"
    );
    let clean = split("## A\ntext\n", &Config::default()).unwrap();
    assert_eq!(clean.quality.to_string(), "All quality checks passed\n");
}
