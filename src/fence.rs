//! Fenced block tracking for the line scanners.
//!
//! Headings, links and promotions all need to know whether a line is literal content. The
//! tracker is fed one line at a time and classifies it, carrying the opening delimiter so that
//! only a matching run closes the block.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the scan currently sits relative to fenced blocks.
pub enum FenceState {
    /// Ordinary markdown; headings are recognised.
    Outside,
    /// Inside a block opened by `len` repetitions of `marker`.
    Inside {
        /// Delimiter character, either `` ` `` or `~`.
        marker: char,
        /// Length of the opening run; a closing run must be at least this long.
        len: usize,
        /// 1-based line of the opening delimiter.
        opened_at: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Classification of a single line.
pub enum LineKind {
    /// The line opens a fenced block.
    Open,
    /// The line closes the open fenced block.
    Close,
    /// The line is literal content inside a fenced block.
    Fenced,
    /// The line is ordinary markdown.
    Text,
}

impl LineKind {
    #[must_use]
    /// Whether the line must be left alone by heading and link scanners.
    pub fn is_literal(self) -> bool {
        !matches!(self, Self::Text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A fence opened but never closed before the end of the input.
pub struct UnclosedFence {
    /// 1-based line of the opening delimiter.
    pub line: usize,
    /// Delimiter character of the unclosed block.
    pub marker: char,
}

#[derive(Debug)]
/// Single-pass fence state machine.
pub struct FenceTracker {
    state: FenceState,
    line: usize,
}

impl Default for FenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FenceTracker {
    #[must_use]
    /// Starts outside any fence, before the first line.
    pub fn new() -> Self {
        Self {
            state: FenceState::Outside,
            line: 0,
        }
    }

    #[must_use]
    /// Current state after the last observed line.
    pub(crate) fn state(&self) -> FenceState {
        self.state
    }

    /// Classifies the next line and advances the state.
    ///
    /// Trailing `\r\n` or `\n` is ignored, so callers may pass lines with their endings.
    pub fn observe(&mut self, line: &str) -> LineKind {
        self.line += 1;
        let line = line.trim_end_matches(['\n', '\r']);
        match self.state {
            FenceState::Outside => match opening_run(line) {
                Some((marker, len)) => {
                    debug!(line = self.line, %marker, len, "fence opened");
                    self.state = FenceState::Inside {
                        marker,
                        len,
                        opened_at: self.line,
                    };
                    LineKind::Open
                }
                None => LineKind::Text,
            },
            FenceState::Inside { marker, len, .. } => {
                if closes(line, marker, len) {
                    debug!(line = self.line, %marker, "fence closed");
                    self.state = FenceState::Outside;
                    LineKind::Close
                } else {
                    LineKind::Fenced
                }
            }
        }
    }

    /// Ends the scan, reporting a fence left open at end of input.
    ///
    /// The end of the input acts as an implicit close.
    pub fn finish(&mut self) -> Option<UnclosedFence> {
        let open = match self.state() {
            FenceState::Inside {
                marker, opened_at, ..
            } => Some(UnclosedFence {
                line: opened_at,
                marker,
            }),
            FenceState::Outside => None,
        };
        self.state = FenceState::Outside;
        open
    }
}

/// Strips up to three columns of leading spaces, the most a fence or heading may be indented.
pub(crate) fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= 3).then(|| &line[indent..])
}

fn opening_run(line: &str) -> Option<(char, usize)> {
    let rest = strip_indent(line)?;
    let marker = rest.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let len = rest.len() - rest.trim_start_matches(marker).len();
    if len < 3 {
        return None;
    }
    // A backtick info string may not itself contain backticks.
    if marker == '`' && rest[len..].contains('`') {
        return None;
    }
    Some((marker, len))
}

fn closes(line: &str, marker: char, open_len: usize) -> bool {
    let Some(rest) = strip_indent(line) else {
        return false;
    };
    let rest = rest.trim_end();
    let len = rest.len() - rest.trim_start_matches(marker).len();
    len >= open_len && len == rest.len()
}

#[cfg(test)]
#[path = "tests/fence.rs"]
mod tests;
