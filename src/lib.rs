//! mdsplit: split a large markdown document into cross-linked files along its `##` sections.
//!
//! The pipeline runs in one pass over an in-memory string: sections are detected with a
//! fence-aware line scanner, each becomes a file with promoted headings and its own table of
//! contents, a master table of contents links them together, and every internal link in the
//! result is checked against the anchors the files actually define.
//!
//! ```
//! let text = "# Guide\n\n## Setup\n\nSee [usage](#usage).\n\n### Usage\n\n## Setup\n";
//! let split = mdsplit::split(text, &mdsplit::Config::default()).unwrap();
//! let names: Vec<&str> = split.units.iter().map(|u| u.filename.as_str()).collect();
//! assert_eq!(names, ["00-toc.md", "01-setup.md", "02-setup-1.md"]);
//! assert!(split.links.is_clean());
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod detect;
pub mod error;
pub mod fence;
pub mod formats;
pub mod heading;
pub mod links;
pub mod naming;
pub mod promote;
pub mod prompts;
pub mod quality;
pub mod report;
pub mod section;
pub mod slug;
pub mod split;
pub mod toc;

pub use config::Config;
pub use error::{Error, Result};
pub use split::{split, Split};
