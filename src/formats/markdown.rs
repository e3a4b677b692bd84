//! Markdown format implementation using tree-sitter-md.
//!
//! Uses the inline grammar, so code spans are understood and links inside them are not
//! reported. Images are not matched: only `[text](destination)` links are cross-references.

use crate::formats::Format;

/// Tree-sitter query for inline markdown links.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::INLINE_LANGUAGE.into()
    }

    fn link_query(&self) -> &'static str {
        "(inline_link (link_destination) @destination)"
    }
}
