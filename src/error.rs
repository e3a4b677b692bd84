//! Failures that stop a split run.
//!
//! Only conditions that leave nothing to emit are errors. Everything discovered once sections
//! exist (broken links, odd heading structure, unclosed fences) is a [`Finding`] instead.
//!
//! [`Finding`]: crate::report::Finding

use std::path::PathBuf;

/// Shorthand for results carrying an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
/// Fatal conditions raised while loading configuration or splitting a document.
pub enum Error {
    /// The document has no `##` heading outside fenced blocks, so there is nothing to split.
    #[error("no sections found: the document has no `##` headings outside code blocks")]
    NoSectionsFound,
    /// A configuration file exists but could not be read or parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// File the configuration was loaded from.
        path: PathBuf,
        /// Parser or reader diagnostic.
        message: String,
    },
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// The tree-sitter grammar or link query could not be loaded.
    #[error("markdown grammar unavailable: {0}")]
    Grammar(String),
}
