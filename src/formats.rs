//! Format trait and implementations for locating links in rendered output.
//!
//! This module defines the `Format` trait which abstracts over the grammar used to find inline
//! links, by providing the tree-sitter language and the query whose captures are link
//! destinations.

pub mod markdown;

/// Grammar and query used to extract link destinations from a line of prose.
pub trait Format {
    /// Tree-sitter language that parses inline content.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the destination of every link to validate.
    fn link_query(&self) -> &str;
}
