use super::{
    missing_placeholder, CandidateStrategy, ContentLoader, ExplicitOverride, Lookup, PrefixMatch,
    SameName, Suffixed,
};
use crate::config::{Config, Override};
use crate::locale::Locale;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CANONICAL: &str = "content/1-brand-narrative.md";

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn lookup(locale: Locale) -> Lookup<'static> {
    Lookup {
        canonical_path: CANONICAL,
        locale,
        subsection: Some("Mission & Vision"),
    }
}

fn loader(root: &Path) -> ContentLoader {
    ContentLoader::new(root, &Config::default())
}

#[test]
fn test_default_locale_reads_canonical() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), CANONICAL, "# Brand Narrative\n");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::En, None);

    assert_eq!(loaded.text, "# Brand Narrative\n");
    assert_eq!(loaded.path_used, CANONICAL);
    assert!(!loaded.missing);
}

#[test]
fn test_default_locale_ignores_locale_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-brand-narrative.md", "한국어");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::En, None);

    assert!(loaded.missing);
    assert_eq!(loaded.text, missing_placeholder(CANONICAL));
}

#[test]
fn test_missing_file_yields_placeholder() {
    let dir = TempDir::new().unwrap();

    let loaded = loader(dir.path()).load("content/9-nonexistent.md", Locale::En, None);

    assert_eq!(loaded.text, "Missing: content/9-nonexistent.md");
    assert_eq!(loaded.path_used, "content/9-nonexistent.md");
    assert!(loaded.missing);
}

#[test]
fn test_alternate_without_locale_directory_falls_back_to_canonical() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), CANONICAL, "english");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::Ko, Some("Mission & Vision"));

    assert_eq!(loaded.text, "english");
    assert_eq!(loaded.path_used, CANONICAL);
    assert_eq!(loaded.locale, Locale::Ko);
}

#[test]
fn test_alternate_with_nothing_reports_canonical_path() {
    let dir = TempDir::new().unwrap();

    let loaded = loader(dir.path()).load(CANONICAL, Locale::Ko, None);

    assert!(loaded.missing);
    assert_eq!(loaded.path_used, CANONICAL);
    assert_eq!(loaded.text, "Missing: content/1-brand-narrative.md");
}

#[test]
fn test_override_beats_same_name() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-brand-narrative.md", "same name");
    write(dir.path(), "content_ko/mission.md", "override");
    let cfg = Config {
        overrides: vec![Override {
            locale: "ko".to_string(),
            subsection: "Mission & Vision".to_string(),
            file: "mission.md".to_string(),
        }],
        ..Config::default()
    };
    let loader = ContentLoader::new(dir.path(), &cfg);

    let hit = loader.load(CANONICAL, Locale::Ko, Some("Mission & Vision"));
    assert_eq!(hit.text, "override");
    assert_eq!(hit.path_used, "content_ko/mission.md");

    let other = loader.load(CANONICAL, Locale::Ko, Some("Audience Insight"));
    assert_eq!(other.text, "same name");
}

#[test]
fn test_override_pointing_at_absent_file_continues_chain() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-brand-narrative-ko.md", "suffixed");
    let cfg = Config {
        overrides: vec![Override {
            locale: "ko".to_string(),
            subsection: "Mission & Vision".to_string(),
            file: "gone.md".to_string(),
        }],
        ..Config::default()
    };

    let loaded =
        ContentLoader::new(dir.path(), &cfg).load(CANONICAL, Locale::Ko, Some("Mission & Vision"));

    assert_eq!(loaded.path_used, "content_ko/1-brand-narrative-ko.md");
}

#[test]
fn test_same_name_beats_suffixed() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-brand-narrative.md", "same name");
    write(dir.path(), "content_ko/1-brand-narrative-ko.md", "suffixed");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::Ko, None);

    assert_eq!(loaded.text, "same name");
}

#[test]
fn test_suffixed_beats_prefix() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-a-first.md", "prefix");
    write(dir.path(), "content_ko/1-brand-narrative-ko.md", "suffixed");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::Ko, None);

    assert_eq!(loaded.text, "suffixed");
}

#[test]
fn test_prefix_match_is_sorted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content_ko/1-zeta.md", "zeta");
    write(dir.path(), "content_ko/1-alpha.md", "alpha");
    write(dir.path(), "content_ko/10-other.md", "ten");
    write(dir.path(), "content_ko/2-brand.md", "two");

    let loaded = loader(dir.path()).load(CANONICAL, Locale::Ko, None);

    assert_eq!(loaded.text, "alpha");
    assert_eq!(loaded.path_used, "content_ko/1-alpha.md");
}

#[test]
fn test_prefix_match_skips_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("content_ko/1-a-directory")).unwrap();
    write(dir.path(), "content_ko/1-b.md", "file");

    let candidate = PrefixMatch::new("content_ko").candidate(&lookup(Locale::Ko), dir.path());

    assert_eq!(candidate.as_deref(), Some("content_ko/1-b.md"));
}

#[test]
fn test_strategy_candidates() {
    let root = Path::new("/nowhere");
    let ko = lookup(Locale::Ko);

    assert_eq!(
        SameName::new("content_ko").candidate(&ko, root).as_deref(),
        Some("content_ko/1-brand-narrative.md")
    );
    assert_eq!(
        Suffixed::new("content_ko", "-ko")
            .candidate(&ko, root)
            .as_deref(),
        Some("content_ko/1-brand-narrative-ko.md")
    );
    assert_eq!(
        PrefixMatch::new("content_ko").candidate(&ko, root),
        None,
        "unreadable directory proposes nothing"
    );

    let overrides = ExplicitOverride::new(
        "content_ko",
        vec![(
            Locale::Ko,
            "Mission & Vision".to_string(),
            "m.md".to_string(),
        )],
    );
    assert_eq!(
        overrides.candidate(&ko, root).as_deref(),
        Some("content_ko/m.md")
    );
    assert_eq!(overrides.candidate(&lookup(Locale::En), root), None);
}

#[test]
fn test_chain_lengths() {
    let dir = TempDir::new().unwrap();
    let loader = loader(dir.path());

    let names: Vec<&str> = loader.chain(Locale::Ko).iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["override", "same-name", "suffixed", "prefix", "canonical"]
    );
    assert_eq!(loader.chain(Locale::En).len(), 1);
}

#[test]
fn test_custom_content_dir() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "docs/1-brand-narrative.md", "docs");
    let cfg = Config {
        content_dir: "docs".to_string(),
        ..Config::default()
    };

    let loaded = ContentLoader::new(dir.path(), &cfg).load(CANONICAL, Locale::En, None);

    assert_eq!(loaded.text, "docs");
    assert_eq!(loaded.path_used, "docs/1-brand-narrative.md");
}
