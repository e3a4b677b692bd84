//! Tables of contents.
//!
//! The master table lists every section file; a section file lists its own subheadings. Both
//! keep document order, since numbering in titles is not trusted.

use crate::section::Subheading;
use std::fmt::Write;

/// Shallowest subheading depth in the source, rendered without indentation.
const BASE_DEPTH: usize = 3;

#[must_use]
/// Escapes square brackets and backslashes so a title can sit inside link text.
pub fn link_text(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[must_use]
/// Master table of contents linking each `(title, file)` pair in order.
pub fn master_toc<'a>(
    heading: &str,
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut out = format!("# {heading}\n\n");
    for (title, file) in entries {
        let _ = writeln!(out, "- [{}]({file})", link_text(title));
    }
    out
}

#[must_use]
/// Entries of a section's own table of contents, one line per subheading.
///
/// `anchors` holds the anchor each subheading received in the section's file, in the same
/// order. Entries are indented two spaces per level below `###`.
pub fn internal_toc(subheadings: &[Subheading], anchors: &[String]) -> String {
    let mut out = String::new();
    for (sub, anchor) in subheadings.iter().zip(anchors) {
        let indent = "  ".repeat(sub.depth.saturating_sub(BASE_DEPTH));
        let _ = writeln!(out, "{indent}- [{}](#{anchor})", link_text(&sub.title));
    }
    out
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
