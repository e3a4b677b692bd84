use super::{parse, plain_text, Heading};

#[test]
fn test_parse_levels() {
    for depth in 1..=6 {
        let line = format!("{} Title", "#".repeat(depth));
        let heading = parse(&line).unwrap();
        assert_eq!(heading.depth, depth);
        assert_eq!(heading.text, "Title");
    }
}

#[test]
fn test_seven_hashes_is_not_a_heading() {
    assert_eq!(parse("####### Too deep"), None);
}

#[test]
fn test_requires_space_and_text() {
    assert_eq!(parse("##NoSpace"), None);
    assert_eq!(parse("##"), None);
    assert_eq!(parse("##   "), None);
    assert_eq!(parse("#hashtag"), None);
}

#[test]
fn test_text_is_verbatim_but_trimmed() {
    let heading = parse("## 4.2.3. **Bold** `code` 🚀 (draft)   \n").unwrap();
    assert_eq!(heading.text, "4.2.3. **Bold** `code` 🚀 (draft)");
}

#[test]
fn test_closing_run_is_dropped() {
    assert_eq!(parse("## Foo ##").unwrap().text, "Foo");
    assert_eq!(parse("## C#").unwrap().text, "C#");
    assert_eq!(parse("## ##"), None);
}

#[test]
fn test_indent_is_recorded() {
    assert_eq!(
        parse("  ### Indented"),
        Some(Heading {
            depth: 3,
            text: "Indented",
            marker_at: 2,
        })
    );
    assert_eq!(parse("    ## Code block"), None);
}

#[test]
fn test_plain_text_drops_comments_and_tags() {
    assert_eq!(plain_text("Intro <!-- omit in toc -->"), "Intro ");
    assert_eq!(plain_text("A <em>b</em> c"), "A b c");
    assert_eq!(plain_text("a < b"), "a < b");
}

#[test]
fn test_plain_text_keeps_link_labels() {
    assert_eq!(plain_text("See [the docs](https://x.y/z) now"), "See the docs now");
    assert_eq!(plain_text("![logo](logo.png) Brand"), "logo Brand");
    assert_eq!(plain_text("[not a link] here"), "[not a link] here");
}

#[test]
fn test_plain_text_drops_emphasis_delimiters() {
    assert_eq!(plain_text("The _real_ thing"), "The real thing");
    assert_eq!(plain_text("***Very*** important"), "Very important");
    assert_eq!(plain_text("[*linked*](#x) text"), "linked text");
    assert_eq!(plain_text("snake_case_name"), "snake_case_name");
    assert_eq!(plain_text("a * b * c"), "a * b * c");
    assert_eq!(plain_text("2 * 3"), "2 * 3");
}

#[test]
fn test_plain_text_leaves_code_spans_alone() {
    assert_eq!(plain_text("Use `_x_` or `<b>`"), "Use `_x_` or `<b>`");
    assert_eq!(plain_text("``a`b`` _c_"), "``a`b`` c");
    assert_eq!(plain_text("`unclosed _d_"), "`unclosed d");
}
