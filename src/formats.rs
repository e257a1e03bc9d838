//! Format trait and implementations for the document types content is written in.
//!
//! A format supplies the tree-sitter grammar and the query that captures heading nodes, which is
//! all the outline needs to know about a document's structure.

pub mod markdown;

/// Grammar and heading query for one document format.
pub trait Format {
    /// Tree-sitter grammar used to parse documents.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose captures are heading nodes.
    fn heading_query(&self) -> &str;
    /// Heading level encoded by a marker node kind, if `kind` is a marker.
    fn marker_level(&self, kind: &str) -> Option<usize>;
    /// Node kind holding a heading's title text.
    fn title_kind(&self) -> &str;
}
