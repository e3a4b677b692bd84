//! Output file names.
//!
//! Names are `NN-title.ext`: a two-digit position in emission order, then the title in kebab
//! case. Numbers written in titles are not trusted for ordering; the master table of contents
//! is always `00`.

use std::collections::{HashMap, HashSet};

/// Stem used when a title has no letters or digits at all.
const FALLBACK_STEM: &str = "section";

#[must_use]
/// Lowercases `text` and joins its alphanumeric runs with single hyphens.
///
/// Unicode letters are kept; everything else, emoji included, acts as a separator.
pub fn kebab_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.extend(c.to_lowercase());
        } else {
            gap = true;
        }
    }
    out
}

#[derive(Debug)]
/// Hands out collision-free file names in emission order.
pub struct FileNamer {
    extension: String,
    taken: HashSet<String>,
    repeats: HashMap<String, usize>,
}

impl FileNamer {
    #[must_use]
    /// A namer producing files with the given extension (without the dot).
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            taken: HashSet::new(),
            repeats: HashMap::new(),
        }
    }

    #[must_use]
    /// Name of the master table of contents.
    pub fn toc_name(&self, stem: &str) -> String {
        format!("00-{stem}.{}", self.extension)
    }

    /// Name for the section emitted at `position` (1-based; `00` belongs to the master TOC).
    ///
    /// Titles that kebab-case to a stem already handed out get `-1`, `-2`, … in the order they
    /// are named.
    pub fn name(&mut self, position: usize, title: &str) -> String {
        let mut stem = kebab_case(title);
        if stem.is_empty() {
            FALLBACK_STEM.clone_into(&mut stem);
        }
        let stem = self.disambiguate(stem);
        format!("{position:02}-{stem}.{}", self.extension)
    }

    fn disambiguate(&mut self, stem: String) -> String {
        if self.taken.insert(stem.clone()) {
            return stem;
        }
        let count = self.repeats.entry(stem.clone()).or_insert(0);
        loop {
            *count += 1;
            let candidate = format!("{stem}-{count}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/naming.rs"]
mod tests;
