//! Findings produced after sections exist.
//!
//! None of these stop a run: they are collected and handed back with the output so the author
//! can decide what to fix. Both reports serialise to JSON and print as one line per finding.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// How much attention a finding deserves.
pub enum Severity {
    /// Worth knowing, usually intentional.
    Info,
    /// Probably a mistake in the source document.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Which structural check produced a finding.
pub enum Check {
    /// A heading more than one level below its predecessor.
    DepthJump,
    /// A section with no content.
    EmptySection,
    /// Two sections whose titles normalise to the same text.
    DuplicateTitle,
    /// A rendered file above the configured size threshold.
    OversizedFile,
    /// A fenced block left open at end of input.
    UnclosedFence,
    /// A `#` heading inside a section body.
    StrayHeading,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One result of the structural checks.
pub struct Finding {
    /// Importance of the finding.
    pub severity: Severity,
    /// Check that raised it.
    pub check: Check,
    /// Output file or source line the finding refers to.
    pub location: String,
    /// Human-readable explanation.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// All structural findings of one run.
pub struct QualityReport {
    /// Findings in the order the checks ran.
    pub findings: Vec<Finding>,
}

impl QualityReport {
    #[must_use]
    /// Whether no check found anything.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings at exactly the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "All quality checks passed");
        }
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// An internal link that does not resolve.
pub struct BrokenLink {
    /// Output file containing the link.
    pub file: String,
    /// 1-based line within that file.
    pub line: usize,
    /// Link destination as written.
    pub target: String,
    /// A destination that would resolve, when one can be found in another file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: broken link `{}`", self.file, self.line, self.target)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean `{suggestion}`?)")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Result of validating every internal link in the output.
pub struct LinkReport {
    /// Number of internal links examined; external links are not counted.
    pub checked: usize,
    /// Links that failed to resolve, in file then line order.
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    #[must_use]
    /// Whether every internal link resolved.
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "All {} internal links resolve", self.checked);
        }
        for link in &self.broken {
            writeln!(f, "{link}")?;
        }
        Ok(())
    }
}
