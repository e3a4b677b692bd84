//! ATX heading recognition.
//!
//! A heading is a run of one to six `#` (indented by at most three spaces), at least one space
//! or tab, then non-empty text. An optional closing run of `#` is dropped from the text.

use crate::fence::strip_indent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A heading line split into its parts.
pub struct Heading<'a> {
    /// Number of leading `#` characters.
    pub depth: usize,
    /// Heading text, trimmed, without any closing `#` run.
    pub text: &'a str,
    /// Byte offset of the first `#` within the line.
    pub marker_at: usize,
}

#[must_use]
/// Parses `line` as an ATX heading.
///
/// Line endings are ignored. Returns `None` for anything that is not a heading, including a
/// bare `##` with no text and runs of seven or more `#`.
pub fn parse(line: &str) -> Option<Heading<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let rest = strip_indent(line)?;
    let marker_at = line.len() - rest.len();
    let depth = rest.len() - rest.trim_start_matches('#').len();
    if !(1..=6).contains(&depth) {
        return None;
    }
    let after = &rest[depth..];
    if !after.starts_with([' ', '\t']) {
        return None;
    }
    let text = strip_closing_run(after.trim());
    if text.is_empty() {
        return None;
    }
    Some(Heading {
        depth,
        text,
        marker_at,
    })
}

fn strip_closing_run(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        return text;
    }
    if without.is_empty() {
        return without;
    }
    if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

#[must_use]
/// Reduces heading text to what a renderer would display, for anchor generation.
///
/// HTML comments and tags are removed, inline links or images are replaced by their bracketed
/// text, and `*`/`_` runs that delimit emphasis are dropped. Code spans are kept verbatim.
/// Everything else is left for the slug rules to deal with.
pub fn plain_text(text: &str) -> String {
    strip_emphasis(&displayed(text))
}

fn displayed(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == '`' {
            let (span, after) = code_span(rest);
            out.push_str(span);
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
            continue;
        }
        if c == '<' {
            if let Some(after) = skip_tag(rest) {
                rest = after;
                continue;
            }
        }
        let link = rest.strip_prefix('!').unwrap_or(rest);
        if link.starts_with('[') {
            if let Some((label, after)) = split_inline_link(link) {
                out.push_str(&displayed(label));
                rest = after;
                continue;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Splits a backtick run at the start of `s` into the code span it opens and the rest.
///
/// A run with no matching closing run is literal text and is returned on its own.
fn code_span(s: &str) -> (&str, &str) {
    let ticks = s.len() - s.trim_start_matches('`').len();
    let mut at = ticks;
    while let Some(found) = s[at..].find('`') {
        let start = at + found;
        let run = s[start..].len() - s[start..].trim_start_matches('`').len();
        if run == ticks {
            return s.split_at(start + run);
        }
        at = start + run;
    }
    s.split_at(ticks)
}

/// Returns the text after an HTML tag starting at `s`, if `s` starts with one.
fn skip_tag(s: &str) -> Option<&str> {
    let inner = &s[1..];
    let first = inner.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '/') {
        return None;
    }
    let end = inner.find('>')?;
    Some(&inner[end + 1..])
}

/// Splits `[label](destination)` at the start of `s` into the label and the remaining text.
fn split_inline_link(s: &str) -> Option<(&str, &str)> {
    let close = s.find(']')?;
    let label = &s[1..close];
    let after = s[close + 1..].strip_prefix('(')?;
    let end = after.find(')')?;
    Some((label, &after[end + 1..]))
}

#[derive(Debug)]
/// A run of `*` or `_`, narrowed from both ends as its characters are matched.
struct DelimiterRun {
    marker: char,
    front: usize,
    back: usize,
    can_open: bool,
    can_close: bool,
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || !(c.is_alphanumeric() || c.is_whitespace() || c.is_control())
}

/// CommonMark left-flanking test; line edges count as whitespace.
fn left_flanking(before: Option<char>, after: Option<char>) -> bool {
    match after {
        None => false,
        Some(a) if a.is_whitespace() => false,
        Some(a) => {
            !is_punctuation(a) || before.is_none_or(|b| b.is_whitespace() || is_punctuation(b))
        }
    }
}

/// Drops the `*` and `_` characters a CommonMark renderer would consume as emphasis.
///
/// Runs pair with the nearest earlier opener of the same character. `_` inside a word never
/// opens or closes, so `snake_case` survives. Backslash escapes make the next character literal.
fn strip_emphasis(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut consumed = vec![false; chars.len()];
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let len = chars[i..].iter().take_while(|&&x| x == c).count();
        match c {
            '\\' if chars.get(i + 1).is_some_and(char::is_ascii_punctuation) => {
                consumed[i] = true;
                i += 2;
            }
            '`' => {
                let close = (i + len..chars.len()).find(|&j| {
                    chars[j] == '`'
                        && chars[j - 1] != '`'
                        && chars[j..].iter().take_while(|&&x| x == '`').count() == len
                });
                i = close.map_or(i + len, |j| j + len);
            }
            '*' | '_' => {
                let before = i.checked_sub(1).map(|j| chars[j]);
                let after = chars.get(i + len).copied();
                let left = left_flanking(before, after);
                let right = left_flanking(after, before);
                let (can_open, can_close) = if c == '_' {
                    (
                        left && (!right || before.is_some_and(is_punctuation)),
                        right && (!left || after.is_some_and(is_punctuation)),
                    )
                } else {
                    (left, right)
                };
                runs.push(DelimiterRun {
                    marker: c,
                    front: i,
                    back: i + len,
                    can_open,
                    can_close,
                });
                i += len;
            }
            _ => i += 1,
        }
    }

    let mut openers: Vec<usize> = Vec::new();
    let mut k = 0;
    while k < runs.len() {
        if runs[k].can_close {
            while runs[k].front < runs[k].back {
                let marker = runs[k].marker;
                let Some(pos) = openers.iter().rposition(|&o| runs[o].marker == marker) else {
                    break;
                };
                let o = openers[pos];
                let n = (runs[o].back - runs[o].front).min(runs[k].back - runs[k].front);
                for flag in &mut consumed[runs[o].back - n..runs[o].back] {
                    *flag = true;
                }
                for flag in &mut consumed[runs[k].front..runs[k].front + n] {
                    *flag = true;
                }
                runs[o].back -= n;
                runs[k].front += n;
                openers.truncate(pos);
                if runs[o].front < runs[o].back {
                    openers.push(o);
                }
            }
        }
        if runs[k].can_open && runs[k].front < runs[k].back {
            openers.push(k);
        }
        k += 1;
    }

    chars
        .iter()
        .zip(consumed)
        .filter_map(|(&c, gone)| (!gone).then_some(c))
        .collect()
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
