//! brandbook: a terminal viewer for hierarchical brand guideline documents.
//!
//! The core maps a selection (section, subsection, locale) to text: a section's English title
//! resolves to a canonical markdown file, a locale-aware fallback chain finds the file to read, and
//! the subsection's `## ` block is extracted from it. The TUI and CLI in `main.rs` are thin
//! collaborators around [`page::compose`].

pub mod app_state;
pub mod audit;
pub mod branding;
pub mod config;
pub mod error;
pub mod extract;
pub mod formats;
pub mod loader;
pub mod locale;
pub mod outline;
pub mod page;
pub mod resolve;
pub mod selection;
pub mod taxonomy;
pub mod ui;
