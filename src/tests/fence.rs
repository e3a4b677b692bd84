use super::{FenceState, FenceTracker, LineKind, UnclosedFence};

fn classify(text: &str) -> Vec<LineKind> {
    let mut tracker = FenceTracker::new();
    text.lines().map(|line| tracker.observe(line)).collect()
}

#[test]
fn test_backtick_fence_hides_headings() {
    let kinds = classify("intro\n```markdown\n# fake\n## also fake\n```\n## real");
    assert_eq!(
        kinds,
        vec![
            LineKind::Text,
            LineKind::Open,
            LineKind::Fenced,
            LineKind::Fenced,
            LineKind::Close,
            LineKind::Text,
        ]
    );
}

#[test]
fn test_different_marker_does_not_close() {
    let kinds = classify("~~~\n```\n## inside\n~~~");
    assert_eq!(
        kinds,
        vec![
            LineKind::Open,
            LineKind::Fenced,
            LineKind::Fenced,
            LineKind::Close,
        ]
    );
}

#[test]
fn test_shorter_run_does_not_close() {
    let kinds = classify("````\n```\n````");
    assert_eq!(kinds, vec![LineKind::Open, LineKind::Fenced, LineKind::Close]);
}

#[test]
fn test_longer_run_closes() {
    let kinds = classify("```\ncode\n`````");
    assert_eq!(kinds, vec![LineKind::Open, LineKind::Fenced, LineKind::Close]);
}

#[test]
fn test_closing_line_must_be_only_delimiters() {
    let kinds = classify("```\n``` not a close\n```");
    assert_eq!(kinds, vec![LineKind::Open, LineKind::Fenced, LineKind::Close]);
}

#[test]
fn test_two_backticks_are_not_a_fence() {
    let kinds = classify("``\n## heading");
    assert_eq!(kinds, vec![LineKind::Text, LineKind::Text]);
}

#[test]
fn test_inline_code_with_backticks_in_info_is_not_a_fence() {
    let kinds = classify("``` foo ` bar");
    assert_eq!(kinds, vec![LineKind::Text]);
}

#[test]
fn test_indented_fence_up_to_three_spaces() {
    let kinds = classify("   ```\nx\n   ```\n    ```");
    assert_eq!(
        kinds,
        vec![
            LineKind::Open,
            LineKind::Fenced,
            LineKind::Close,
            LineKind::Text,
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    let mut tracker = FenceTracker::new();
    assert_eq!(tracker.observe("```rust\r\n"), LineKind::Open);
    assert_eq!(tracker.observe("## x\r\n"), LineKind::Fenced);
    assert_eq!(tracker.observe("```\r\n"), LineKind::Close);
}

#[test]
fn test_unclosed_fence_reported_on_finish() {
    let mut tracker = FenceTracker::new();
    tracker.observe("text");
    tracker.observe("~~~~");
    tracker.observe("## hidden");
    assert!(matches!(
        tracker.state(),
        FenceState::Inside {
            marker: '~',
            len: 4,
            opened_at: 2
        }
    ));
    assert_eq!(
        tracker.finish(),
        Some(UnclosedFence {
            line: 2,
            marker: '~'
        })
    );
    assert_eq!(tracker.state(), FenceState::Outside);
}

#[test]
fn test_closed_fence_finishes_clean() {
    let mut tracker = FenceTracker::new();
    for line in ["```", "x", "```"] {
        tracker.observe(line);
    }
    assert_eq!(tracker.finish(), None);
}
