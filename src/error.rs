//! Error types shared across the library.
//!
//! Missing content is never an error here: the loader substitutes a placeholder. These types only
//! cover programming contract violations (malformed taxonomy data) and parse failures in the
//! optional tooling around the core.

use crate::locale::Locale;
use crate::taxonomy::SectionId;
use thiserror::Error;

/// A section display name could not be turned into a canonical path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The name has no `.` between its number and its title.
    #[error("section name {0:?} has no '.' separating its number from its title")]
    MissingSeparator(String),
}

/// The taxonomy violates one of its structural invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// There are no sections at all.
    #[error("taxonomy has no sections")]
    Empty,
    /// Two sections share an id.
    #[error("section id {0} appears more than once")]
    DuplicateId(SectionId),
    /// A section has no title in the default locale.
    #[error("section {0} has no default-locale title")]
    MissingDefaultTitle(SectionId),
    /// A section has no subsections at all.
    #[error("section {0} has no subsections")]
    NoSubsections(SectionId),
    /// A subsection lacks a label in a locale the section is titled in, or vice versa.
    #[error("section {section} subsection {index} has no {locale} label")]
    MissingSubsectionLabel {
        /// Section holding the incomplete subsection.
        section: SectionId,
        /// Position of the subsection in canonical order.
        index: usize,
        /// Locale missing from the subsection.
        locale: Locale,
    },
    /// The default-locale title cannot be resolved to a path.
    #[error("section {section}: {source}")]
    Unresolvable {
        /// Section with the malformed title.
        section: SectionId,
        /// Underlying resolution failure.
        source: ResolveError,
    },
}

/// Markdown could not be parsed into an outline.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load markdown grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The heading query did not compile.
    #[error("invalid heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The parser returned no tree.
    #[error("markdown parse produced no tree")]
    NoTree,
}
