//! Per-session navigation position.
//!
//! A [`Selection`] belongs to exactly one viewer session; nothing here is global. Every mutation
//! re-checks the subsection index against the taxonomy and resets it to 0 when it no longer fits,
//! so callers never see an invalid position and no operation can fail.

use crate::locale::Locale;
use crate::taxonomy::{SectionId, Taxonomy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Active section, subsection index and locale.
pub struct Selection {
    section: SectionId,
    subsection: usize,
    locale: Locale,
}

impl Selection {
    #[must_use]
    /// First section, first subsection, default locale.
    pub fn new(taxonomy: &Taxonomy) -> Self {
        Self {
            section: taxonomy.first_id(),
            subsection: 0,
            locale: Locale::default(),
        }
    }

    #[must_use]
    /// Active section id.
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[must_use]
    /// Active subsection index, always in range for the active section.
    pub fn subsection(&self) -> usize {
        self.subsection
    }

    #[must_use]
    /// Active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch section. Unknown ids leave the current section in place.
    pub fn select_section(&mut self, taxonomy: &Taxonomy, id: SectionId) {
        if taxonomy.get(id).is_some() {
            self.section = id;
        } else {
            tracing::debug!(id, "ignoring unknown section");
        }
        self.reconcile(taxonomy);
    }

    /// Switch subsection by canonical index.
    pub fn select_subsection(&mut self, taxonomy: &Taxonomy, index: usize) {
        self.subsection = index;
        self.reconcile(taxonomy);
    }

    /// Switch locale.
    pub fn select_locale(&mut self, taxonomy: &Taxonomy, locale: Locale) {
        self.locale = locale;
        self.reconcile(taxonomy);
    }

    fn reconcile(&mut self, taxonomy: &Taxonomy) {
        if taxonomy.get(self.section).is_none() {
            self.section = taxonomy.first_id();
        }
        if self.subsection >= taxonomy.subsection_count(self.section) {
            self.subsection = 0;
        }
    }
}

#[cfg(test)]
#[path = "tests/selection.rs"]
mod tests;
