use super::{internal_toc, link_text, master_toc};
use crate::section::Subheading;

fn sub(depth: usize, title: &str) -> Subheading {
    Subheading {
        depth,
        title: title.to_string(),
        line: 0,
    }
}

#[test]
fn test_master_toc_lists_files_in_order() {
    let toc = master_toc(
        "Table of Contents <!-- omit in toc -->",
        [
            ("Setup", "01-setup.md"),
            ("Setup", "02-setup-1.md"),
            ("1. Intro", "03-1-intro.md"),
        ],
    );
    assert_eq!(
        toc,
        "# Table of Contents <!-- omit in toc -->\n\n\
         - [Setup](01-setup.md)\n\
         - [Setup](02-setup-1.md)\n\
         - [1. Intro](03-1-intro.md)\n"
    );
}

#[test]
fn test_internal_toc_indents_by_depth() {
    let subs = vec![sub(3, "A"), sub(4, "B"), sub(5, "C"), sub(3, "D")];
    let anchors: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
    assert_eq!(
        internal_toc(&subs, &anchors),
        "- [A](#a)\n  - [B](#b)\n    - [C](#c)\n- [D](#d)\n"
    );
}

#[test]
fn test_internal_toc_empty() {
    assert_eq!(internal_toc(&[], &[]), "");
}

#[test]
fn test_link_text_escapes_brackets() {
    assert_eq!(link_text("Array[T] usage"), "Array\\[T\\] usage");
    assert_eq!(link_text("Plain"), "Plain");
}

#[test]
fn test_trailing_backslash_keeps_entry_a_link() {
    assert_eq!(link_text("Paths under C:\\"), "Paths under C:\\\\");
    let toc = master_toc("Contents", [("Paths under C:\\", "01-paths-under-c.md")]);
    assert_eq!(toc, "# Contents\n\n- [Paths under C:\\\\](01-paths-under-c.md)\n");
}
