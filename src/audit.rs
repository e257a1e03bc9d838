//! Cross-checks default-locale content files against the taxonomy.
//!
//! A subsection whose `## <title>` heading is missing still renders (the whole document is shown
//! instead), so these mismatches are silent in the viewer. The audit surfaces them, deciding
//! heading identity with the same line test the extractor uses. The markdown outline only tells
//! real headings apart from `## ` lines that the extractor would still treat as boundaries.

use crate::error::OutlineError;
use crate::extract::{find_block, SUBSECTION_MARKER};
use crate::loader::ContentLoader;
use crate::locale::Locale;
use crate::outline::outline;
use std::collections::BTreeSet;
use crate::taxonomy::{SectionId, Taxonomy};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One discrepancy between the taxonomy and the content on disk.
pub enum Finding {
    /// No content file exists for the section.
    MissingFile {
        /// Section without content.
        section: SectionId,
        /// Canonical path that was sought.
        path: String,
    },
    /// A taxonomy subsection has no matching level-2 heading.
    MissingHeading {
        /// Section holding the subsection.
        section: SectionId,
        /// File that was searched.
        path: String,
        /// Default-locale subsection title.
        subsection: String,
    },
    /// A level-2 heading matches no taxonomy subsection.
    UnexpectedHeading {
        /// Section the file belongs to.
        section: SectionId,
        /// File holding the heading.
        path: String,
        /// Heading text after the `## ` marker, as written.
        heading: String,
        /// One-based line of the heading.
        line: usize,
    },
    /// A `## ` line that is not a markdown heading (inside a code block, for instance) but still
    /// ends the subsection before it.
    StrayMarker {
        /// Section the file belongs to.
        section: SectionId,
        /// File holding the line.
        path: String,
        /// One-based line number.
        line: usize,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile { section, path } => {
                write!(f, "section {section}: missing file {path}")
            }
            Self::MissingHeading {
                section,
                path,
                subsection,
            } => write!(f, "section {section}: {path} has no \"## {subsection}\""),
            Self::UnexpectedHeading {
                section,
                path,
                heading,
                line,
            } => write!(
                f,
                "section {section}: {path}:{line} heading \"## {heading}\" is not in the taxonomy"
            ),
            Self::StrayMarker {
                section,
                path,
                line,
            } => write!(
                f,
                "section {section}: {path}:{line} \"## \" outside a heading ends the subsection early"
            ),
        }
    }
}

/// Audit every section's default-locale content.
///
/// # Errors
///
/// Returns an error if a document cannot be outlined.
pub fn audit(taxonomy: &Taxonomy, loader: &ContentLoader) -> Result<Vec<Finding>, OutlineError> {
    let mut findings = Vec::new();

    for section in taxonomy.sections() {
        let loaded = loader.load(section.canonical_path(), Locale::default(), None);
        if loaded.missing {
            findings.push(Finding::MissingFile {
                section: section.id(),
                path: loaded.path_used,
            });
            continue;
        }

        let text = loaded.text.as_str();
        let path = &loaded.path_used;
        let expected = section.subsection_titles(Locale::default());

        for subsection in &expected {
            if find_block(text, subsection).is_none() {
                findings.push(Finding::MissingHeading {
                    section: section.id(),
                    path: path.clone(),
                    subsection: (*subsection).to_string(),
                });
            }
        }

        let heading_lines: BTreeSet<usize> = outline(text)?
            .into_iter()
            .filter(|heading| heading.level == 2)
            .map(|heading| heading.line)
            .collect();

        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            let Some(heading) = trimmed.strip_prefix(SUBSECTION_MARKER) else {
                continue;
            };
            if expected.contains(&heading) {
                continue;
            }
            if heading_lines.contains(&index) {
                findings.push(Finding::UnexpectedHeading {
                    section: section.id(),
                    path: path.clone(),
                    heading: heading.to_string(),
                    line: index + 1,
                });
            } else if line.starts_with(SUBSECTION_MARKER) {
                findings.push(Finding::StrayMarker {
                    section: section.id(),
                    path: path.clone(),
                    line: index + 1,
                });
            }
        }
    }

    Ok(findings)
}

#[cfg(test)]
#[path = "tests/audit.rs"]
mod tests;
