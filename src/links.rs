//! Cross-reference validation over rendered output.
//!
//! Every inline link in every output file is classified. External links and links to non-markdown
//! files are ignored; `#anchor` links must name a heading in the same file, and links to another
//! output file must name an emitted file and, if they carry an anchor, a heading in it. Nothing is
//! rewritten: unresolved links are reported with a suggestion when the anchor exists elsewhere.

use crate::error::{Error, Result};
use crate::fence::FenceTracker;
use crate::formats::Format;
use crate::report::{BrokenLink, LinkReport};
use crate::split::OutputUnit;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tracing::debug;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A link destination found in rendered text.
pub struct Link {
    /// 1-based line of the link.
    pub line: usize,
    /// Destination as written, without angle brackets.
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a link destination points at.
pub enum LinkTarget<'a> {
    /// Has a scheme or is root-relative; not checked.
    External,
    /// A relative path to something other than a markdown file; not checked.
    Asset,
    /// A heading in the same file.
    Anchor(Cow<'a, str>),
    /// Another output file, optionally at a heading.
    File {
        /// File name with any leading `./` removed.
        name: Cow<'a, str>,
        /// Fragment after `#`, if present.
        anchor: Option<Cow<'a, str>>,
    },
}

fn has_scheme(destination: &str) -> bool {
    if destination.starts_with("//") {
        return true;
    }
    let Some(colon) = destination.find(':') else {
        return false;
    };
    let scheme = &destination[..colon];
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

fn decode(text: &str) -> Cow<'_, str> {
    percent_decode_str(text).decode_utf8_lossy()
}

#[must_use]
/// Classifies a link destination; `extension` is the extension of emitted files.
pub fn classify<'a>(destination: &'a str, extension: &str) -> LinkTarget<'a> {
    if has_scheme(destination) || destination.starts_with('/') {
        return LinkTarget::External;
    }
    let (path, anchor) = match destination.split_once('#') {
        Some((path, anchor)) => (path, Some(anchor)),
        None => (destination, None),
    };
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    if path.is_empty() {
        return LinkTarget::Anchor(decode(anchor.unwrap_or_default()));
    }
    let mut name = path;
    while let Some(rest) = name.strip_prefix("./") {
        name = rest;
    }
    let is_markdown = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_none_or(|ext| ext == extension || ext == "md" || ext == "markdown");
    if !is_markdown {
        return LinkTarget::Asset;
    }
    LinkTarget::File {
        name: decode(name),
        anchor: anchor.map(decode),
    }
}

/// Finds link destinations with a tree-sitter grammar, skipping fenced blocks.
pub struct LinkExtractor {
    parser: Parser,
    query: Query,
}

impl LinkExtractor {
    /// Prepares a parser and query for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grammar`] if the language or query cannot be loaded.
    pub fn new(format: &impl Format) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Grammar(e.to_string()))?;
        let query =
            Query::new(&language, format.link_query()).map_err(|e| Error::Grammar(e.to_string()))?;
        Ok(Self { parser, query })
    }

    /// Extracts every link destination in `text`, line by line.
    pub fn links(&mut self, text: &str) -> Vec<Link> {
        let mut fences = FenceTracker::new();
        let mut cursor = QueryCursor::new();
        let mut found = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if fences.observe(line).is_literal() || !line.contains("](") {
                continue;
            }
            let Some(tree) = self.parser.parse(line, None) else {
                continue;
            };
            let mut matches = cursor.matches(&self.query, tree.root_node(), line.as_bytes());
            while let Some(m) = matches.next() {
                for capture in m.captures {
                    if let Ok(destination) = capture.node.utf8_text(line.as_bytes()) {
                        found.push(Link {
                            line: index + 1,
                            destination: destination
                                .trim_start_matches('<')
                                .trim_end_matches('>')
                                .to_string(),
                        });
                    }
                }
            }
        }
        found
    }
}

/// Checks every internal link in `units` against the files and anchors they define.
///
/// # Errors
///
/// Returns [`Error::Grammar`] if the link grammar cannot be loaded.
pub fn validate(units: &[OutputUnit], extension: &str, format: &impl Format) -> Result<LinkReport> {
    let mut extractor = LinkExtractor::new(format)?;
    let files: HashMap<&str, &OutputUnit> = units.iter().map(|u| (u.filename.as_str(), u)).collect();
    let mut report = LinkReport::default();

    for unit in units {
        for link in extractor.links(&unit.content) {
            let (resolved, anchor) = match classify(&link.destination, extension) {
                LinkTarget::External | LinkTarget::Asset => continue,
                LinkTarget::Anchor(anchor) => (resolves(unit, &anchor), Some(anchor)),
                LinkTarget::File { name, anchor } => match files.get(name.as_ref()) {
                    Some(target) => (
                        anchor.as_ref().is_none_or(|a| resolves(target, a)),
                        anchor,
                    ),
                    None => (false, None),
                },
            };
            report.checked += 1;
            if resolved {
                continue;
            }
            debug!(
                file = unit.filename.as_str(),
                line = link.line,
                target = link.destination.as_str(),
                "broken link"
            );
            let suggestion = anchor.and_then(|a| {
                units
                    .iter()
                    .find(|other| !a.is_empty() && other.has_anchor(&a))
                    .map(|other| format!("{}#{a}", other.filename))
            });
            report.broken.push(BrokenLink {
                file: unit.filename.clone(),
                line: link.line,
                target: link.destination,
                suggestion,
            });
        }
    }
    Ok(report)
}

/// An empty fragment points at the top of the file and always resolves.
fn resolves(unit: &OutputUnit, anchor: &str) -> bool {
    anchor.is_empty() || unit.has_anchor(anchor)
}

#[cfg(test)]
#[path = "tests/links.rs"]
mod tests;
