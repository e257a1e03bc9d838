//! Heading outline of a content document, parsed with tree-sitter.
//!
//! The outline is advisory tooling around the core. The extractor works on raw lines; the content
//! audit uses the outline to tell real headings from `## ` lines inside code blocks.

use crate::error::OutlineError;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading found in a document.
pub struct Heading {
    /// Heading depth (1 for `#`, 2 for `##`, ...).
    pub level: usize,
    /// Heading text without markup symbols.
    pub title: String,
    /// Zero-based line the heading starts on.
    pub line: usize,
}

/// Outline of a markdown document.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded, or parsing yields no tree.
pub fn outline(text: &str) -> Result<Vec<Heading>, OutlineError> {
    outline_with(&MarkdownFormat, text)
}

/// Outline of a document in `format`.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded, or parsing yields no tree.
pub fn outline_with<F: Format>(format: &F, text: &str) -> Result<Vec<Heading>, OutlineError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser.parse(text, None).ok_or(OutlineError::NoTree)?;
    let query = Query::new(&language, format.heading_query())?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), text.as_bytes());
    let mut headings = Vec::new();

    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(heading) = heading_from_node(format, capture.node, text) {
                headings.push(heading);
            }
        }
    }

    Ok(headings)
}

fn heading_from_node<F: Format>(format: &F, node: Node<'_>, text: &str) -> Option<Heading> {
    let mut level = None;
    let mut title = String::new();
    let mut walker = node.walk();

    for child in node.children(&mut walker) {
        if let Some(marker) = format.marker_level(child.kind()) {
            level = Some(marker);
        } else if child.kind() == format.title_kind() {
            title = child.utf8_text(text.as_bytes()).ok()?.trim().to_string();
        }
    }

    Some(Heading {
        level: level?,
        title,
        line: node.start_position().row,
    })
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
