use super::{slugify, AnchorScope};

#[test]
fn test_slugify_basics() {
    assert_eq!(slugify("Section Name"), "section-name");
    assert_eq!(slugify("Section: Name!"), "section-name");
    assert_eq!(slugify("3. Section Name"), "3-section-name");
    assert_eq!(slugify("  Padded  "), "padded");
}

#[test]
fn test_slugify_preserves_hyphen_runs() {
    assert_eq!(
        slugify("16.1.1 Unit Testing - Core Services"),
        "1611-unit-testing---core-services"
    );
    assert_eq!(
        slugify("16.1.2 Integration Testing - End-to-End"),
        "1612-integration-testing---end-to-end"
    );
    assert_eq!(slugify("Multi - Word - Title"), "multi---word---title");
    assert_eq!(slugify("a--b"), "a--b");
}

#[test]
fn test_slugify_does_not_collapse_spaces() {
    assert_eq!(slugify("Section    Name"), "section----name");
}

#[test]
fn test_slugify_unicode_letters() {
    assert_eq!(slugify("Configuración"), "configuración");
    assert_eq!(slugify("Größe Ämter"), "größe-ämter");
    assert_eq!(slugify("日本語 テスト"), "日本語-テスト");
    assert_eq!(slugify("Ünïcödé Tëst"), "ünïcödé-tëst");
}

#[test]
fn test_slugify_strips_punctuation_and_markup() {
    assert_eq!(slugify("C++ & Rust"), "c--rust");
    assert_eq!(slugify("**Bold** and `code`"), "bold-and-code");
    assert_eq!(slugify("Price: $100 (€90)"), "price-100-90");
    assert_eq!(slugify("snake_case name"), "snake_case-name");
}

#[test]
fn test_slugify_emoji_leaves_leading_hyphen() {
    assert_eq!(slugify("🚀 Launch"), "-launch");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn test_slugify_is_deterministic() {
    let text = "4.2.3. Déjà vu — again?";
    assert_eq!(slugify(text), slugify(text));
}

#[test]
fn test_scope_numbers_duplicates_from_one() {
    let mut scope = AnchorScope::new();
    let anchors: Vec<String> = (0..4).map(|_| scope.anchor("Setup")).collect();
    assert_eq!(anchors, vec!["setup", "setup-1", "setup-2", "setup-3"]);
}

#[test]
fn test_scope_skips_literal_suffixed_heading() {
    let mut scope = AnchorScope::new();
    assert_eq!(scope.anchor("foo"), "foo");
    assert_eq!(scope.anchor("foo-1"), "foo-1");
    assert_eq!(scope.anchor("foo"), "foo-2");
    assert_eq!(scope.anchor("foo-1"), "foo-1-1");
}

#[test]
fn test_scopes_are_independent() {
    let mut first = AnchorScope::new();
    let mut second = AnchorScope::new();
    assert_eq!(first.anchor("Overview"), "overview");
    assert_eq!(second.anchor("Overview"), "overview");
}

#[test]
fn test_scope_uses_displayed_text() {
    let mut scope = AnchorScope::new();
    assert_eq!(
        scope.anchor("Table of Contents <!-- omit in toc -->"),
        "table-of-contents"
    );
    assert_eq!(scope.anchor("See [docs](http://x.y)"), "see-docs");
}

#[test]
fn test_scope_positional_fallback() {
    let mut scope = AnchorScope::new();
    assert_eq!(scope.anchor("Intro"), "intro");
    assert_eq!(scope.anchor("🚀🔥"), "heading-2");
    assert!(scope.contains("heading-2"));
    assert_eq!(scope.anchors(), ["intro", "heading-2"]);
}

#[test]
fn test_scope_widens_on_counter_overflow() {
    let mut scope = AnchorScope::new();
    assert_eq!(scope.anchor("x"), "x");
    scope.repeats.insert("x".to_string(), u32::MAX);
    assert_eq!(scope.anchor("x"), format!("x-{}-1", u32::MAX));
    scope.repeats.insert("x".to_string(), u32::MAX);
    assert_eq!(scope.anchor("x"), format!("x-{}-2", u32::MAX));
}

#[test]
fn test_slugify_drops_non_decimal_numbers() {
    assert_eq!(slugify("Step ½"), "step-");
    assert_eq!(slugify("x² growth"), "x-growth");
    assert_eq!(slugify("Phase 3"), "phase-3");
}

#[test]
fn test_slugify_keeps_combining_marks() {
    assert_eq!(slugify("Cafe\u{301} menu"), "cafe\u{301}-menu");
}

#[test]
fn test_scope_anchors_follow_rendered_emphasis() {
    let mut scope = AnchorScope::new();
    assert_eq!(scope.anchor("The _real_ thing"), "the-real-thing");
    assert_eq!(scope.anchor("**Bold** _and_ *it*"), "bold-and-it");
    assert_eq!(scope.anchor("`snake_case` and my_var"), "snake_case-and-my_var");
    assert_eq!(scope.anchor("`_private_` helpers"), "_private_-helpers");
    assert_eq!(scope.anchor("\\_literal\\_ name"), "_literal_-name");
}
