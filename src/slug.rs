//! GitHub-flavored heading anchors.
//!
//! Mirrors the anchor filter GitHub applies to rendered headings:
//!
//! 1. lowercase the text
//! 2. strip surrounding whitespace
//! 3. drop every character that is not a word character (letters, combining marks, decimal
//!    digits, `_` and the other connector punctuation), a space or a hyphen
//! 4. turn each space into a hyphen, without collapsing runs
//!
//! Duplicates within one rendered file get `-1`, `-2`, … in order of appearance, with the same
//! bookkeeping as github-slugger so that a literal `foo-1` heading is skipped over.

use crate::heading;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::warn;

/// Everything outside `\p{Word}`, space and hyphen. The regex crate's Unicode `\w` is
/// `\p{Word}`: letters, marks, decimal digits, connector punctuation and join controls.
static NOT_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\- ]").expect("anchor filter pattern is valid"));

#[must_use]
/// Slug for `text` with no collision handling; may be empty.
///
/// ```
/// use mdsplit::slug::slugify;
///
/// assert_eq!(slugify("Unit Testing - Core Services"), "unit-testing---core-services");
/// assert_eq!(slugify("Section: Name!"), "section-name");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NOT_ANCHOR.replace_all(lower.trim(), "").replace(' ', "-")
}

#[derive(Debug, Default)]
/// Anchors already handed out within one output file.
///
/// Feed it every heading of a file in the order they are rendered; each call returns the anchor
/// that heading receives.
pub struct AnchorScope {
    taken: HashSet<String>,
    repeats: HashMap<String, u32>,
    order: Vec<String>,
}

impl AnchorScope {
    #[must_use]
    /// An empty scope, as at the top of a new file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the anchor for the next heading of this file.
    ///
    /// The heading text is reduced to its displayed form first. Headings with nothing left
    /// after slugging get a positional `heading-N` anchor, N counting headings from 1.
    pub fn anchor(&mut self, heading_text: &str) -> String {
        let mut base = slugify(&heading::plain_text(heading_text));
        if base.is_empty() {
            base = format!("heading-{}", self.order.len() + 1);
        }
        let anchor = self.disambiguate(base);
        self.order.push(anchor.clone());
        anchor
    }

    fn disambiguate(&mut self, base: String) -> String {
        if !self.contains(&base) {
            self.taken.insert(base.clone());
            return base;
        }
        loop {
            let count = self.repeats.entry(base.clone()).or_insert(0);
            let Some(next) = count.checked_add(1) else {
                return self.widen(&base);
            };
            *count = next;
            let candidate = format!("{base}-{next}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Falls back to a second counter once a base has exhausted its suffixes.
    fn widen(&mut self, base: &str) -> String {
        warn!(base, "anchor suffix counter overflowed; widening suffix");
        let mut extra: u64 = 1;
        loop {
            let candidate = format!("{base}-{}-{extra}", u32::MAX);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            extra += 1;
        }
    }

    #[must_use]
    /// Whether a heading in this scope received `anchor`.
    pub(crate) fn contains(&self, anchor: &str) -> bool {
        self.taken.contains(anchor)
    }

    #[must_use]
    /// Anchors in the order they were assigned.
    pub fn anchors(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
