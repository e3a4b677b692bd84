//! Section representation for a document split along its `##` headings.
//!
//! A section is everything between one `##` heading and the next, together with the deeper
//! headings found in that span. Sections are built once by the detector and only read after
//! that; the heading depths they record are the source depths, before promotion.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A heading nested inside a section body.
pub struct Subheading {
    /// Source depth (3 for `###`), not yet promoted.
    pub depth: usize,
    /// Heading text as written.
    pub title: String,
    /// 1-based line in the source document.
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One `##`-delimited unit of the source document, emitted as its own file.
pub struct Section {
    /// Heading text as written, including numbering, emoji and inline markup.
    pub title: String,
    /// 0-based position among the sections.
    pub order_index: usize,
    /// 1-based line of the `##` heading in the source document.
    pub line: usize,
    /// Source lines after the heading up to the next `##` heading, line endings preserved.
    pub raw_body: String,
    /// Deeper headings in the body, in document order.
    pub subheadings: Vec<Subheading>,
    /// 1-based lines of `#` headings inside the body, which stay in it verbatim.
    #[serde(skip)]
    pub stray_headings: Vec<usize>,
    /// Whether the body contains a fenced block.
    pub has_code_blocks: bool,
    /// Whether an image appears in the body outside fenced blocks.
    pub has_images: bool,
}

impl Section {
    #[must_use]
    /// Whether the body holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.raw_body.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// The parsed input: its title and its sections in source order.
pub struct Document {
    /// Text of the first `#` heading before the first section, if any.
    pub title: Option<String>,
    /// Sections in the order they appear.
    pub sections: Vec<Section>,
    /// 1-based line of a fence still open at end of input.
    pub unclosed_fence: Option<usize>,
}
