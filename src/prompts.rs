//! Post-processing prompts written next to the split files.
//!
//! A review prompt is always included. Prompts for broken links, code blocks and images are only
//! added when the split contains them, and each lists the files concerned.

use crate::split::Split;
use std::fmt::Write;

const REVIEW: &str = "\
You are a technical documentation expert. Review these markdown files, which were produced by
splitting one large document along its `##` headings.

Context:
- Each file holds one section of the original document.
- Headings were promoted one level (`##` became `#`, `###` became `##`, and so on).
- Tables of contents were generated automatically.

Check each file for completeness, logical flow, heading hierarchy, table of contents accuracy
and consistent formatting. Point out content that depends on another file without linking to
it, and anything duplicated across files.";

const BROKEN_LINKS: &str = "\
You are a technical documentation expert. Some links in these split markdown files no longer
resolve, usually because the heading they point to now lives in a different file.

For each broken link below, find the file and heading it should point to and rewrite it, for
example `[Setup](#setup)` becomes `[Setup](02-setup.md#setup)`.";

const CODE_BLOCKS: &str = "\
You are a technical documentation expert. Review the code blocks in these files: every block
must be closed, should name its language, and must still make sense without the surrounding
sections it was split from.";

const IMAGES: &str = "\
You are a technical documentation expert. Review the image references in these files: paths
must be correct relative to the new file locations and alt text should describe the image.";

#[must_use]
/// Renders the prompts file for a completed split.
pub fn render(split: &Split) -> String {
    let summary = split.summary();
    let mut out = String::from("# Recommended Prompts for Post-Processing\n\n");
    let _ = writeln!(out, "Split summary:");
    let _ = writeln!(out, "- Sections: {}", summary.sections);
    let _ = writeln!(out, "- Broken links: {}", summary.broken_links);
    let _ = writeln!(out, "- Code blocks: {}", yes_no(summary.code_blocks));
    let _ = writeln!(out, "- Images: {}", yes_no(summary.images));
    let _ = writeln!(out, "- Numbered sections: {}", yes_no(summary.numbered_sections));

    let files: Vec<String> = split
        .sections()
        .map(|(section, unit)| format!("- {}: {}", unit.filename, section.title))
        .collect();

    prompt(&mut out, "Content Review", REVIEW, &files);
    if !split.links.is_clean() {
        let broken: Vec<String> = split.links.broken.iter().map(|l| format!("- {l}")).collect();
        prompt(&mut out, "Fix Broken Links", BROKEN_LINKS, &broken);
    }
    if summary.code_blocks {
        let with_code: Vec<String> = split
            .sections()
            .filter(|(section, _)| section.has_code_blocks)
            .map(|(_, unit)| format!("- {}", unit.filename))
            .collect();
        prompt(&mut out, "Code Block Validation", CODE_BLOCKS, &with_code);
    }
    if summary.images {
        let with_images: Vec<String> = split
            .sections()
            .filter(|(section, _)| section.has_images)
            .map(|(_, unit)| format!("- {}", unit.filename))
            .collect();
        prompt(&mut out, "Image Validation", IMAGES, &with_images);
    }
    out
}

fn prompt(out: &mut String, title: &str, body: &str, items: &[String]) {
    let _ = write!(out, "\n## {title}\n\n```\n{body}\n\nFiles:\n");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push_str("```\n");
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
#[path = "tests/prompts.rs"]
mod tests;
