use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = Config::parse("").unwrap();
    let default = Config::default();
    assert_eq!(cfg.extension, default.extension);
    assert_eq!(cfg.toc_stem, "toc");
    assert_eq!(cfg.size_threshold, 100_000);
    assert!(cfg.omit_marker);
    assert!(!cfg.implicit_section);
}

#[test]
fn test_partial_file_overrides_only_named_keys() {
    let cfg = Config::parse("size_threshold = 10\ndrop_existing_toc = true\n").unwrap();
    assert_eq!(cfg.size_threshold, 10);
    assert!(cfg.drop_existing_toc);
    assert_eq!(cfg.toc_title, "Table of Contents");
}

#[test]
fn test_load_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "extension = \"markdown\"\nomit_marker = false").unwrap();
    let cfg = Config::load(Some(file.path())).unwrap();
    assert_eq!(cfg.extension, "markdown");
    assert_eq!(cfg.marker(), "");
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(Config::load(Some(&missing)).is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "size_threshold = \"big\"").unwrap();
    assert!(matches!(
        Config::load(Some(file.path())),
        Err(crate::error::Error::Config { .. })
    ));
}
