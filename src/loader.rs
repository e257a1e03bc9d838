//! Finds and reads the best content file for a canonical path and locale.
//!
//! Resolution runs an ordered chain of [`CandidateStrategy`] values. Each strategy proposes at most
//! one relative path; the first proposal that exists as a file on disk is read and returned. The
//! default locale only consults the canonical file. The alternate locale tries, in order:
//!
//! 1. an explicit override registered for the requested subsection,
//! 2. a file with the same name in the locale directory,
//! 3. a suffixed variant (`1-brand-narrative-ko.md`) in the locale directory,
//! 4. the first file in the locale directory sharing the `<n>-` prefix,
//! 5. the default-locale canonical file.
//!
//! When nothing exists the text is a `Missing: <path>` placeholder naming the canonical file.

use crate::config::Config;
use crate::locale::Locale;
use crate::resolve::numeric_prefix;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
/// What is being looked up.
pub struct Lookup<'a> {
    /// `content/<n>-<slug>.md` for the section.
    pub canonical_path: &'a str,
    /// Requested locale.
    pub locale: Locale,
    /// Default-locale title of the active subsection, used as the override key.
    pub subsection: Option<&'a str>,
}

impl Lookup<'_> {
    #[must_use]
    /// Final path component of the canonical path.
    pub fn file_name(&self) -> &str {
        self.canonical_path
            .rsplit_once('/')
            .map_or(self.canonical_path, |(_, name)| name)
    }
}

/// One step of the fallback chain.
pub trait CandidateStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Propose a path relative to the content root, without checking that it exists.
    fn candidate(&self, lookup: &Lookup<'_>, root: &Path) -> Option<String>;
}

/// Registered file for a specific subsection in the locale directory.
pub struct ExplicitOverride {
    dir: String,
    entries: Vec<(Locale, String, String)>,
}

impl ExplicitOverride {
    #[must_use]
    /// Overrides as `(locale, subsection title, file name)` triples.
    pub fn new(dir: impl Into<String>, entries: Vec<(Locale, String, String)>) -> Self {
        Self {
            dir: dir.into(),
            entries,
        }
    }
}

impl CandidateStrategy for ExplicitOverride {
    fn name(&self) -> &'static str {
        "override"
    }

    fn candidate(&self, lookup: &Lookup<'_>, _root: &Path) -> Option<String> {
        let subsection = lookup.subsection?;
        self.entries
            .iter()
            .find(|(locale, title, _)| *locale == lookup.locale && title == subsection)
            .map(|(_, _, file)| format!("{}/{file}", self.dir))
    }
}

/// Identically named file in the locale directory.
pub struct SameName {
    dir: String,
}

impl SameName {
    #[must_use]
    /// Look in `dir`.
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CandidateStrategy for SameName {
    fn name(&self) -> &'static str {
        "same-name"
    }

    fn candidate(&self, lookup: &Lookup<'_>, _root: &Path) -> Option<String> {
        Some(format!("{}/{}", self.dir, lookup.file_name()))
    }
}

/// `<stem><suffix>.<ext>` in the locale directory.
pub struct Suffixed {
    dir: String,
    suffix: String,
}

impl Suffixed {
    #[must_use]
    /// Look in `dir` for names carrying `suffix`.
    pub fn new(dir: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            suffix: suffix.into(),
        }
    }
}

impl CandidateStrategy for Suffixed {
    fn name(&self) -> &'static str {
        "suffixed"
    }

    fn candidate(&self, lookup: &Lookup<'_>, _root: &Path) -> Option<String> {
        let name = match lookup.file_name().rsplit_once('.') {
            Some((stem, ext)) => format!("{stem}{}.{ext}", self.suffix),
            None => format!("{}{}", lookup.file_name(), self.suffix),
        };
        Some(format!("{}/{name}", self.dir))
    }
}

/// First file in the locale directory, in sorted order, named `<n>-…`.
pub struct PrefixMatch {
    dir: String,
}

impl PrefixMatch {
    #[must_use]
    /// Scan `dir`.
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CandidateStrategy for PrefixMatch {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn candidate(&self, lookup: &Lookup<'_>, root: &Path) -> Option<String> {
        let prefix = format!("{}-", numeric_prefix(lookup.file_name()));
        let entries = fs::read_dir(root.join(&self.dir)).ok()?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(&prefix))
            .collect();
        names.sort();

        names
            .into_iter()
            .next()
            .map(|name| format!("{}/{name}", self.dir))
    }
}

/// The default-locale file itself.
pub struct Canonical {
    dir: String,
}

impl Canonical {
    #[must_use]
    /// Default-locale documents live in `dir`.
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CandidateStrategy for Canonical {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn candidate(&self, lookup: &Lookup<'_>, _root: &Path) -> Option<String> {
        Some(format!("{}/{}", self.dir, lookup.file_name()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Text for one lookup and where it came from.
pub struct LoadedContent {
    /// File contents, or the missing placeholder.
    pub text: String,
    /// Path relative to the content root that supplied the text, or that was sought.
    pub path_used: String,
    /// Locale that was requested.
    pub locale: Locale,
    /// Whether every candidate was absent.
    pub missing: bool,
}

#[must_use]
/// Deterministic stand-in text for a file that does not exist.
pub fn missing_placeholder(path: &str) -> String {
    format!("Missing: {path}")
}

/// Resolves lookups against a content root using one chain per locale.
pub struct ContentLoader {
    root: PathBuf,
    canonical: Canonical,
    default_chain: Vec<Box<dyn CandidateStrategy>>,
    alternate_chain: Vec<Box<dyn CandidateStrategy>>,
}

impl ContentLoader {
    #[must_use]
    /// Build the standard chains from the content layout in `cfg`.
    pub fn new(root: impl Into<PathBuf>, cfg: &Config) -> Self {
        let overrides = cfg
            .overrides
            .iter()
            .filter_map(|entry| match entry.locale() {
                Some(locale) => Some((locale, entry.subsection.clone(), entry.file.clone())),
                None => {
                    tracing::warn!(locale = %entry.locale, "skipping override for unknown locale");
                    None
                }
            })
            .collect();

        let alternate_chain: Vec<Box<dyn CandidateStrategy>> = vec![
            Box::new(ExplicitOverride::new(&cfg.alternate_dir, overrides)),
            Box::new(SameName::new(&cfg.alternate_dir)),
            Box::new(Suffixed::new(&cfg.alternate_dir, &cfg.alternate_suffix)),
            Box::new(PrefixMatch::new(&cfg.alternate_dir)),
            Box::new(Canonical::new(&cfg.content_dir)),
        ];

        Self::with_chains(
            root,
            Canonical::new(&cfg.content_dir),
            vec![Box::new(Canonical::new(&cfg.content_dir))],
            alternate_chain,
        )
    }

    #[must_use]
    /// Build a loader from explicit chains; `canonical` names the path reported when all fail.
    pub fn with_chains(
        root: impl Into<PathBuf>,
        canonical: Canonical,
        default_chain: Vec<Box<dyn CandidateStrategy>>,
        alternate_chain: Vec<Box<dyn CandidateStrategy>>,
    ) -> Self {
        Self {
            root: root.into(),
            canonical,
            default_chain,
            alternate_chain,
        }
    }

    #[must_use]
    /// Directory all candidate paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    /// Strategies consulted for `locale`, in priority order.
    pub fn chain(&self, locale: Locale) -> &[Box<dyn CandidateStrategy>] {
        if locale.is_default() {
            &self.default_chain
        } else {
            &self.alternate_chain
        }
    }

    #[must_use]
    /// Resolve and read content for `canonical_path` in `locale`.
    ///
    /// Never fails: if no candidate can be read the placeholder names the canonical file.
    pub fn load(
        &self,
        canonical_path: &str,
        locale: Locale,
        subsection: Option<&str>,
    ) -> LoadedContent {
        let lookup = Lookup {
            canonical_path,
            locale,
            subsection,
        };

        for strategy in self.chain(locale) {
            let Some(relative) = strategy.candidate(&lookup, &self.root) else {
                continue;
            };
            let full = self.root.join(&relative);
            if !full.is_file() {
                tracing::debug!(strategy = strategy.name(), path = %relative, "candidate absent");
                continue;
            }
            match fs::read_to_string(&full) {
                Ok(text) => {
                    tracing::debug!(strategy = strategy.name(), path = %relative, "loaded content");
                    return LoadedContent {
                        text,
                        path_used: relative,
                        locale,
                        missing: false,
                    };
                }
                Err(e) => {
                    tracing::warn!(path = %relative, error = %e, "unreadable content file");
                }
            }
        }

        let path_used = self
            .canonical
            .candidate(&lookup, &self.root)
            .unwrap_or_else(|| canonical_path.to_string());
        tracing::debug!(path = %path_used, %locale, "content missing");
        LoadedContent {
            text: missing_placeholder(&path_used),
            path_used,
            locale,
            missing: true,
        }
    }
}

#[cfg(test)]
#[path = "tests/loader.rs"]
mod tests;
