//! Markdown format implementation using tree-sitter-md.
//!
//! Only ATX-style headings (`#` syntax) are captured, matching the `## <title>` convention the
//! extractor relies on.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn marker_level(&self, kind: &str) -> Option<usize> {
        kind.strip_prefix("atx_h")?
            .strip_suffix("_marker")?
            .parse()
            .ok()
    }

    fn title_kind(&self) -> &'static str {
        "inline"
    }
}
