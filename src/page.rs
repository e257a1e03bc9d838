//! Turns a selection into the text a viewer shows.
//!
//! This is the single interaction handler shared by the TUI and the CLI: section lookup, canonical
//! path, locale-aware load, then subsection extraction for the default locale only. Nothing is
//! cached, so edits to content files show up on the next call.

use crate::extract::find_block;
use crate::loader::ContentLoader;
use crate::locale::Locale;
use crate::selection::Selection;
use crate::taxonomy::{RelatedLink, SectionId, Taxonomy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything needed to render one selection.
pub struct Page {
    /// Section the content was loaded for.
    pub section_id: SectionId,
    /// Section title in the active locale.
    pub section_title: String,
    /// Subsection title in the active locale.
    pub subsection_title: String,
    /// Active locale.
    pub locale: Locale,
    /// Extracted block, whole document, or missing placeholder.
    pub body: String,
    /// Path relative to the content root that supplied the body.
    pub source_path: String,
    /// Whether the body is the missing placeholder.
    pub missing: bool,
    /// Whether the body was narrowed to the subsection.
    pub extracted: bool,
    /// Related links for the section.
    pub links: Vec<RelatedLink>,
}

impl Page {
    /// Render as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[must_use]
/// Resolve, load and extract the content for `selection`.
pub fn compose(taxonomy: &Taxonomy, loader: &ContentLoader, selection: &Selection) -> Page {
    let Some(section) = taxonomy
        .get(selection.section())
        .or_else(|| taxonomy.sections().first())
    else {
        return Page {
            section_id: selection.section(),
            section_title: String::new(),
            subsection_title: String::new(),
            locale: selection.locale(),
            body: String::new(),
            source_path: String::new(),
            missing: true,
            extracted: false,
            links: Vec::new(),
        };
    };

    let locale = selection.locale();
    let key = section.subsection(selection.subsection(), Locale::default());
    let loaded = loader.load(section.canonical_path(), locale, key);

    let block = match key {
        Some(title) if locale.is_default() && !loaded.missing => find_block(&loaded.text, title),
        _ => None,
    };
    let (body, extracted) = match block.map(str::to_string) {
        Some(block) => (block, true),
        None => (loaded.text, false),
    };

    Page {
        section_id: section.id(),
        section_title: section.title(locale).to_string(),
        subsection_title: section
            .subsection(selection.subsection(), locale)
            .unwrap_or_default()
            .to_string(),
        locale,
        body,
        source_path: loaded.path_used,
        missing: loaded.missing,
        extracted,
        links: section.links().to_vec(),
    }
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
