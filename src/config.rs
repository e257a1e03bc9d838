//! Configuration to acknowledge content layout preferences as well as set defaults.
//!
//! We look for a `brandbook.toml` in the content root (or wherever `--config` points), and if
//! present load settings from there. A missing file means defaults; a malformed one is logged
//! and also means defaults, so the viewer always starts.

use crate::locale::Locale;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the content root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "brandbook.toml";

const DEFAULT_TITLE: &str = "Cafe Nogales Blueprint";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Pins one subsection of an alternate locale to a specific file in that locale's directory.
pub struct Override {
    /// Locale code the override applies to, e.g. `ko`.
    pub locale: String,
    /// Default-locale subsection title, matched exactly.
    pub subsection: String,
    /// File name inside the alternate-locale directory.
    pub file: String,
}

impl Override {
    #[must_use]
    /// Parsed locale, or `None` if the code is not recognised.
    pub fn locale(&self) -> Option<Locale> {
        self.locale.parse().ok()
    }
}

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Content layout preferences loaded from brandbook.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "content".to_string())]
    /// On-disk directory holding default-locale documents, relative to the content root.
    pub content_dir: String,
    #[facet(default = "content_ko".to_string())]
    /// On-disk directory holding alternate-locale documents, relative to the content root.
    pub alternate_dir: String,
    #[facet(default = "-ko".to_string())]
    /// Suffix inserted before the extension of alternate-locale file names.
    pub alternate_suffix: String,
    #[facet(default = "assets/logo.txt".to_string())]
    /// Optional text banner shown in the header, relative to the content root.
    pub logo_path: String,
    #[facet(default = DEFAULT_TITLE.to_string())]
    /// Plain label used when the logo is unavailable.
    pub title: String,
    #[facet(default = Vec::new())]
    /// Explicit per-subsection file overrides.
    pub overrides: Vec<Override>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            alternate_dir: "content_ko".to_string(),
            alternate_suffix: "-ko".to_string(),
            logo_path: "assets/logo.txt".to_string(),
            title: DEFAULT_TITLE.to_string(),
            overrides: Vec::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path` if present, otherwise defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|message| {
                tracing::warn!(path = %path.display(), %message, "ignoring malformed config");
                Self::default()
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the TOML is invalid or has mistyped keys.
    pub fn parse(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
