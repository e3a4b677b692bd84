//! Section detection: one linear, fence-aware pass over the document.
//!
//! Every `##` heading outside a fenced block opens a section. A `#` heading before the first
//! section names the document; anything else before the first section is front matter and is
//! dropped.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fence::{FenceTracker, LineKind};
use crate::heading::{self, Heading};
use crate::section::{Document, Section, Subheading};
use tracing::{debug, warn};

/// Fallback title for an implicit section when the document has no `#` title.
const IMPLICIT_TITLE: &str = "Document";

#[derive(Debug)]
/// What the line being scanned belongs to.
enum Region {
    /// Before the first section.
    FrontMatter,
    /// Inside a section whose heading has been seen.
    Section(Section),
    /// Inside an existing table of contents that is being dropped.
    Discarded,
}

struct Scanner<'c> {
    cfg: &'c Config,
    fences: FenceTracker,
    region: Region,
    document: Document,
    dropped: usize,
    implicit: bool,
}

impl<'c> Scanner<'c> {
    fn new(cfg: &'c Config, implicit: bool) -> Self {
        let region = if implicit {
            Region::Section(open_section(IMPLICIT_TITLE, 0, 0))
        } else {
            Region::FrontMatter
        };
        Self {
            cfg,
            fences: FenceTracker::new(),
            region,
            document: Document::default(),
            dropped: 0,
            implicit,
        }
    }

    fn line(&mut self, number: usize, line: &str) {
        let kind = self.fences.observe(line);
        if kind.is_literal() {
            if kind == LineKind::Open {
                if let Region::Section(section) = &mut self.region {
                    section.has_code_blocks = true;
                }
            }
            if let Some(h) = heading::parse(line) {
                debug!(line = number, depth = h.depth, text = h.text, "ignoring heading in fence");
            }
            self.push(line);
            return;
        }
        match heading::parse(line) {
            Some(h) if h.depth == 2 => self.boundary(number, &h),
            Some(h) if h.depth == 1 => self.top_level(number, line, &h),
            Some(h) => {
                if let Region::Section(section) = &mut self.region {
                    section.subheadings.push(Subheading {
                        depth: h.depth,
                        title: h.text.to_string(),
                        line: number,
                    });
                }
                self.push(line);
            }
            None => {
                if line.contains("![") {
                    if let Region::Section(section) = &mut self.region {
                        section.has_images = true;
                    }
                }
                self.push(line);
            }
        }
    }

    fn push(&mut self, line: &str) {
        match &mut self.region {
            Region::Section(section) => section.raw_body.push_str(line),
            Region::FrontMatter | Region::Discarded => self.dropped += 1,
        }
    }

    fn boundary(&mut self, number: usize, h: &Heading<'_>) {
        self.close();
        if self.cfg.drop_existing_toc && is_toc_title(h.text) {
            debug!(line = number, title = h.text, "dropping existing table of contents");
            self.region = Region::Discarded;
            return;
        }
        let index = self.document.sections.len();
        debug!(line = number, index, title = h.text, "section boundary");
        self.region = Region::Section(open_section(h.text, index, number));
    }

    fn top_level(&mut self, number: usize, line: &str, h: &Heading<'_>) {
        let implicit = self.implicit;
        match &mut self.region {
            Region::FrontMatter if self.document.title.is_none() => {
                self.document.title = Some(h.text.to_string());
            }
            Region::Section(section)
                if implicit
                    && self.document.title.is_none()
                    && section.raw_body.trim().is_empty() =>
            {
                // The implicit section starts at line 1, so the title line leads its body.
                self.document.title = Some(h.text.to_string());
                section.raw_body.clear();
            }
            Region::Section(section) => {
                section.stray_headings.push(number);
                section.raw_body.push_str(line);
            }
            Region::FrontMatter | Region::Discarded => self.dropped += 1,
        }
    }

    fn close(&mut self) {
        if let Region::Section(section) = std::mem::replace(&mut self.region, Region::Discarded) {
            self.document.sections.push(section);
        }
    }

    fn finish(mut self) -> Document {
        self.close();
        if let Some(open) = self.fences.finish() {
            warn!(line = open.line, marker = %open.marker, "fence never closed; treating end of input as its close");
            self.document.unclosed_fence = Some(open.line);
        }
        if self.dropped > 0 {
            debug!(lines = self.dropped, "dropped lines outside any section");
        }
        self.document
    }
}

fn open_section(title: &str, order_index: usize, line: usize) -> Section {
    Section {
        title: title.to_string(),
        order_index,
        line,
        raw_body: String::new(),
        subheadings: Vec::new(),
        stray_headings: Vec::new(),
        has_code_blocks: false,
        has_images: false,
    }
}

fn is_toc_title(text: &str) -> bool {
    let plain = heading::plain_text(text);
    let plain = plain.trim();
    plain.eq_ignore_ascii_case("table of contents") || plain.eq_ignore_ascii_case("contents")
}

fn scan(text: &str, cfg: &Config, implicit: bool) -> Document {
    let mut scanner = Scanner::new(cfg, implicit);
    for (index, line) in text.split_inclusive('\n').enumerate() {
        scanner.line(index + 1, line);
    }
    scanner.finish()
}

/// Splits `text` into its title and `##` sections.
///
/// With `implicit_section` enabled, a document without any `##` heading becomes a single
/// section named after its `#` title.
///
/// # Errors
///
/// Returns [`Error::NoSectionsFound`] when no `##` heading exists outside fenced blocks and
/// implicit sections are disabled.
pub fn detect(text: &str, cfg: &Config) -> Result<Document> {
    let document = scan(text, cfg, false);
    if !document.sections.is_empty() {
        return Ok(document);
    }
    if !cfg.implicit_section || text.trim().is_empty() {
        return Err(Error::NoSectionsFound);
    }
    let mut document = scan(text, cfg, true);
    if let (Some(title), Some(section)) = (&document.title, document.sections.first_mut()) {
        section.title.clone_from(title);
    }
    Ok(document)
}

#[cfg(test)]
#[path = "tests/detect.rs"]
mod tests;
