//! Structural checks over the parsed sections and rendered files.

use crate::config::Config;
use crate::naming::kebab_case;
use crate::report::{Check, Finding, QualityReport, Severity};
use crate::section::{Document, Section};
use crate::split::OutputUnit;
use std::collections::HashMap;

/// Runs every check and collects the findings.
///
/// `units` must hold the master table of contents first, as produced by
/// [`split`](crate::split::split).
#[must_use]
pub fn check(document: &Document, units: &[OutputUnit], cfg: &Config) -> QualityReport {
    let mut findings = Vec::new();
    if let Some(line) = document.unclosed_fence {
        findings.push(Finding {
            severity: Severity::Warning,
            check: Check::UnclosedFence,
            location: format!("line {line}"),
            message: "code block is never closed; it runs to the end of the document".to_string(),
        });
    }
    for (section, unit) in document.sections.iter().zip(units.iter().skip(1)) {
        depth_jumps(section, &unit.filename, &mut findings);
        if section.is_empty() {
            findings.push(Finding {
                severity: Severity::Warning,
                check: Check::EmptySection,
                location: unit.filename.clone(),
                message: format!("section '{}' has no content", section.title),
            });
        }
        for line in &section.stray_headings {
            findings.push(Finding {
                severity: Severity::Warning,
                check: Check::StrayHeading,
                location: unit.filename.clone(),
                message: format!("top-level heading at source line {line} is kept as body text"),
            });
        }
    }
    duplicate_titles(&document.sections, units, &mut findings);
    for unit in units {
        let size = unit.content.len();
        if size > cfg.size_threshold {
            findings.push(Finding {
                severity: Severity::Info,
                check: Check::OversizedFile,
                location: unit.filename.clone(),
                message: format!("{size} bytes exceeds the {} byte threshold", cfg.size_threshold),
            });
        }
    }
    QualityReport { findings }
}

/// Flags headings more than one level deeper than the heading before them.
///
/// The section's own `##` heading is the starting point, so a `####` directly under it is a jump.
fn depth_jumps(section: &Section, file: &str, findings: &mut Vec<Finding>) {
    let mut previous = 2;
    for sub in &section.subheadings {
        if sub.depth > previous + 1 {
            findings.push(Finding {
                severity: Severity::Warning,
                check: Check::DepthJump,
                location: file.to_string(),
                message: format!(
                    "heading '{}' at source line {} jumps from depth {previous} to {}",
                    sub.title, sub.line, sub.depth
                ),
            });
        }
        previous = sub.depth;
    }
}

fn normalized_title(title: &str) -> String {
    let kebab = kebab_case(title);
    if kebab.is_empty() {
        title.trim().to_lowercase()
    } else {
        kebab
    }
}

fn duplicate_titles(sections: &[Section], units: &[OutputUnit], findings: &mut Vec<Finding>) {
    let mut first_seen: HashMap<String, &Section> = HashMap::new();
    for (section, unit) in sections.iter().zip(units.iter().skip(1)) {
        let key = normalized_title(&section.title);
        if let Some(first) = first_seen.get(&key) {
            findings.push(Finding {
                severity: Severity::Warning,
                check: Check::DuplicateTitle,
                location: unit.filename.clone(),
                message: format!(
                    "title '{}' duplicates '{}' from source line {}",
                    section.title, first.title, first.line
                ),
            });
        } else {
            first_seen.insert(key, section);
        }
    }
}

#[cfg(test)]
#[path = "tests/quality.rs"]
mod tests;
