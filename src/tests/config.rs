use super::{Config, Override};
use crate::locale::Locale;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::parse("alternate_dir = \"translations\"\n").unwrap();

    assert_eq!(cfg.alternate_dir, "translations");
    assert_eq!(cfg.content_dir, "content");
    assert_eq!(cfg.alternate_suffix, "-ko");
}

#[test]
fn test_overrides_table() {
    let cfg = Config::parse(
        r#"
[[overrides]]
locale = "ko"
subsection = "Optional: Korean-language version"
file = "7-korean-edition.md"
"#,
    )
    .unwrap();

    assert_eq!(
        cfg.overrides,
        vec![Override {
            locale: "ko".to_string(),
            subsection: "Optional: Korean-language version".to_string(),
            file: "7-korean-edition.md".to_string(),
        }]
    );
    assert_eq!(cfg.overrides[0].locale(), Some(Locale::Ko));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        Config::load(&dir.path().join("brandbook.toml")),
        Config::default()
    );
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brandbook.toml");
    fs::write(&path, "content_dir = [not toml").unwrap();

    assert_eq!(Config::load(&path), Config::default());
}

#[test]
fn test_unknown_override_locale() {
    let entry = Override {
        locale: "fr".to_string(),
        subsection: "Logo Suite".to_string(),
        file: "x.md".to_string(),
    };
    assert_eq!(entry.locale(), None);
}
