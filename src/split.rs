//! One split run, from source text to rendered output and reports.
//!
//! The run owns everything it derives: the parsed document, the output files with the anchors
//! each one defines, and both reports. Nothing outlives it and nothing here touches the disk;
//! writing the units out is left to the caller.

use crate::config::Config;
use crate::detect::detect;
use crate::error::Result;
use crate::fence::FenceTracker;
use crate::formats::markdown::MarkdownFormat;
use crate::heading;
use crate::links;
use crate::naming::FileNamer;
use crate::promote::promote_body;
use crate::quality;
use crate::report::{LinkReport, QualityReport};
use crate::section::{Document, Section};
use crate::slug::AnchorScope;
use crate::toc;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// What an output file holds.
pub enum UnitKind {
    /// The master table of contents.
    MasterToc,
    /// The section at this index of [`Document::sections`].
    Section(usize),
}

#[derive(Clone, Debug, Serialize)]
/// One file to be written.
pub struct OutputUnit {
    /// Role of the file.
    pub kind: UnitKind,
    /// File name within the output directory.
    pub filename: String,
    /// Full rendered text.
    #[serde(skip)]
    pub content: String,
    /// Byte offset in `content` where the promoted section body begins. The master table of
    /// contents has no body, so its offset is the length of `content`.
    #[serde(skip)]
    pub body_start: usize,
    /// Anchors of every heading in the file, in order.
    pub anchors: Vec<String>,
}

impl OutputUnit {
    #[must_use]
    /// Whether a heading in this file has the given anchor.
    pub fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors.iter().any(|a| a == anchor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Overview of a run, as shown to the user and used to pick prompts.
pub struct Summary {
    /// Number of section files.
    pub sections: usize,
    /// Number of unresolved internal links.
    pub broken_links: usize,
    /// Whether any section contains a fenced block.
    pub code_blocks: bool,
    /// Whether any section contains an image.
    pub images: bool,
    /// Whether any section title starts with a number like `3.`.
    pub numbered_sections: bool,
}

#[derive(Debug)]
/// Everything derived from one source document.
pub struct Split {
    /// Parsed source.
    pub document: Document,
    /// Master table of contents first, then one unit per section in order.
    pub units: Vec<OutputUnit>,
    /// Structural findings.
    pub quality: QualityReport,
    /// Link validation results.
    pub links: LinkReport,
}

impl Split {
    /// Output units for sections, paired with their section.
    pub fn sections(&self) -> impl Iterator<Item = (&Section, &OutputUnit)> {
        self.document.sections.iter().zip(self.units.iter().skip(1))
    }

    #[must_use]
    /// Counts and flags describing the run.
    pub fn summary(&self) -> Summary {
        let sections = &self.document.sections;
        Summary {
            sections: sections.len(),
            broken_links: self.links.broken.len(),
            code_blocks: sections.iter().any(|s| s.has_code_blocks),
            images: sections.iter().any(|s| s.has_images),
            numbered_sections: sections.iter().any(|s| is_numbered(&s.title)),
        }
    }
}

fn is_numbered(title: &str) -> bool {
    let digits = title.len() - title.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    digits > 0 && title[digits..].starts_with('.')
}

/// Splits `text` into output units and validates the result.
///
/// # Errors
///
/// Returns [`crate::Error::NoSectionsFound`] when there is nothing to split, or
/// [`crate::Error::Grammar`] if the link grammar cannot be loaded.
pub fn split(text: &str, cfg: &Config) -> Result<Split> {
    let document = detect(text, cfg)?;
    info!(sections = document.sections.len(), "detected sections");

    let mut namer = FileNamer::new(&cfg.extension);
    let toc_name = namer.toc_name(&cfg.toc_stem);
    let names: Vec<String> = document
        .sections
        .iter()
        .map(|s| namer.name(s.order_index + 1, &s.title))
        .collect();

    let mut units = Vec::with_capacity(names.len() + 1);
    units.push(render_master(&document, &names, toc_name, cfg));
    for (section, name) in document.sections.iter().zip(names) {
        debug!(file = name.as_str(), title = section.title.as_str(), "rendering section");
        units.push(render_section(section, name, cfg));
    }

    let links = links::validate(&units, &cfg.extension, &MarkdownFormat)?;
    let quality = quality::check(&document, &units, cfg);
    info!(
        files = units.len(),
        broken_links = links.broken.len(),
        findings = quality.findings.len(),
        "split complete"
    );
    Ok(Split {
        document,
        units,
        quality,
        links,
    })
}

fn render_master(document: &Document, names: &[String], filename: String, cfg: &Config) -> OutputUnit {
    let heading = format!("{}{}", cfg.toc_title, cfg.marker());
    let entries = document
        .sections
        .iter()
        .map(|s| s.title.as_str())
        .zip(names.iter().map(String::as_str));
    let mut scope = AnchorScope::new();
    scope.anchor(&heading);
    let content = toc::master_toc(&heading, entries);
    OutputUnit {
        kind: UnitKind::MasterToc,
        filename,
        body_start: content.len(),
        content,
        anchors: scope.anchors().to_vec(),
    }
}

fn render_section(section: &Section, filename: String, cfg: &Config) -> OutputUnit {
    let marker = cfg.marker();
    let body = promote_body(&section.raw_body);

    // Anchors are assigned in the order the headings appear in the file.
    let mut scope = AnchorScope::new();
    scope.anchor(&section.title);
    let toc_heading = (!section.subheadings.is_empty()).then(|| {
        let heading = format!("{}{marker}", cfg.toc_title);
        scope.anchor(&heading);
        heading
    });
    let sub_anchors = body_anchors(&body, &mut scope);
    debug_assert_eq!(sub_anchors.len(), section.subheadings.len());

    let mut content = format!("# {}{marker}\n", section.title);
    if let Some(heading) = toc_heading {
        content.push_str("\n## ");
        content.push_str(&heading);
        content.push_str("\n\n");
        content.push_str(&toc::internal_toc(&section.subheadings, &sub_anchors));
    }
    if !(body.starts_with('\n') || body.starts_with("\r\n")) {
        content.push('\n');
    }
    let body_start = content.len();
    content.push_str(&body);

    OutputUnit {
        kind: UnitKind::Section(section.order_index),
        filename,
        content,
        body_start,
        anchors: scope.anchors().to_vec(),
    }
}

/// Assigns anchors to every heading of a promoted body, returning those of the subheadings.
fn body_anchors(body: &str, scope: &mut AnchorScope) -> Vec<String> {
    let mut fences = FenceTracker::new();
    let mut anchors = Vec::new();
    for line in body.split_inclusive('\n') {
        if fences.observe(line).is_literal() {
            continue;
        }
        if let Some(h) = heading::parse(line) {
            let anchor = scope.anchor(h.text);
            if h.depth > 1 {
                anchors.push(anchor);
            }
        }
    }
    anchors
}

#[cfg(test)]
#[path = "tests/split.rs"]
mod tests;
