//! Heading promotion for content moved into its own file.
//!
//! A section's `##` heading becomes the file's `#` title, so every heading in its body moves up
//! one level. Lines in fenced blocks are left untouched.

use crate::fence::FenceTracker;
use crate::heading;
use std::borrow::Cow;

#[must_use]
/// Promotes one line if it is a heading of depth two or more.
///
/// Depth-one headings are returned unchanged: there is no depth zero.
pub fn promote_line(line: &str) -> Cow<'_, str> {
    match heading::parse(line) {
        Some(h) if h.depth > 1 => {
            let mut promoted = String::with_capacity(line.len() - 1);
            promoted.push_str(&line[..h.marker_at]);
            promoted.push_str(&line[h.marker_at + 1..]);
            Cow::Owned(promoted)
        }
        _ => Cow::Borrowed(line),
    }
}

#[must_use]
/// Promotes every heading in `body` outside fenced blocks, preserving all other bytes.
pub fn promote_body(body: &str) -> String {
    let mut fences = FenceTracker::new();
    let mut out = String::with_capacity(body.len());
    for line in body.split_inclusive('\n') {
        if fences.observe(line).is_literal() {
            out.push_str(line);
        } else {
            out.push_str(&promote_line(line));
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/promote.rs"]
mod tests;
