//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdsplit.toml, and if present we load settings from there.
//! This controls output naming, generated headings, report thresholds and how the detector
//! treats documents that already carry a table of contents.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "mdsplit.toml";

const DEFAULT_EXTENSION: &str = "md";
const DEFAULT_TOC_STEM: &str = "toc";
const DEFAULT_TOC_TITLE: &str = "Table of Contents";
const DEFAULT_SIZE_THRESHOLD: usize = 100_000;
const DEFAULT_PROMPTS_FILE: &str = "recommended_prompts.txt";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from mdsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_EXTENSION.to_string())]
    /// Extension given to every emitted markdown file.
    pub extension: String,
    #[facet(default = DEFAULT_TOC_STEM.to_string())]
    /// Name of the master table of contents, after its `00-` prefix.
    pub toc_stem: String,
    #[facet(default = DEFAULT_TOC_TITLE.to_string())]
    /// Heading used for the master and per-file tables of contents.
    pub toc_title: String,
    #[facet(default = true)]
    /// Append `<!-- omit in toc -->` to generated headings.
    pub omit_marker: bool,
    #[facet(default = DEFAULT_SIZE_THRESHOLD)]
    /// Rendered files larger than this many bytes are reported.
    pub size_threshold: usize,
    #[facet(default = DEFAULT_PROMPTS_FILE.to_string())]
    /// Name of the post-processing prompts file.
    pub prompts_file: String,
    #[facet(default = true)]
    /// Whether to emit the prompts file at all.
    pub write_prompts: bool,
    #[facet(default = false)]
    /// Skip a `## Table of Contents` or `## Contents` section instead of emitting it.
    pub drop_existing_toc: bool,
    #[facet(default = false)]
    /// Treat a document without `##` headings as a single section instead of failing.
    pub implicit_section: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            toc_stem: DEFAULT_TOC_STEM.to_string(),
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            omit_marker: true,
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            prompts_file: DEFAULT_PROMPTS_FILE.to_string(),
            write_prompts: true,
            drop_existing_toc: false,
            implicit_section: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from mdsplit.toml if present, or use the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read, or if any configuration file
    /// that was found does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let contents = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents).map_err(|message| Error::Config { path, message })
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser's diagnostic if the text is not a valid configuration.
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// The suffix appended to generated headings, including its leading space.
    pub fn marker(&self) -> &'static str {
        if self.omit_marker {
            " <!-- omit in toc -->"
        } else {
            ""
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
