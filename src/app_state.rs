//! The viewer session: selection, focus and the page currently on screen.
//!
//! The TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates. Each session owns its own [`Selection`]; every change to it recomposes the page from
//! disk so externally edited content shows up immediately.

use crate::branding::Banner;
use crate::loader::ContentLoader;
use crate::page::{compose, Page};
use crate::selection::Selection;
use crate::taxonomy::Taxonomy;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Which pane receives navigation keys.
pub enum Focus {
    /// Top-level section list.
    Sections,
    /// Subsections of the active section.
    Subsections,
    /// Content pane; arrows scroll.
    Content,
}

impl Focus {
    #[must_use]
    /// Next pane in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::Sections => Self::Subsections,
            Self::Subsections => Self::Content,
            Self::Content => Self::Sections,
        }
    }

    #[must_use]
    /// Previous pane in tab order.
    pub fn prev(self) -> Self {
        match self {
            Self::Sections => Self::Content,
            Self::Subsections => Self::Sections,
            Self::Content => Self::Subsections,
        }
    }
}

/// One interactive viewing session.
pub struct AppState {
    /// Read-only section tree.
    pub taxonomy: Taxonomy,
    /// Content resolution for this session's root.
    pub loader: ContentLoader,
    /// Active navigation position.
    pub selection: Selection,
    /// Pane receiving arrow keys.
    pub focus: Focus,
    /// Content for the current selection.
    pub page: Page,
    /// First visible line of the content pane.
    pub scroll: u16,
    /// Header logo or label.
    pub banner: Banner,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Start a session at the default selection.
    pub fn new(taxonomy: Taxonomy, loader: ContentLoader, banner: Banner) -> Self {
        let selection = Selection::new(&taxonomy);
        let page = compose(&taxonomy, &loader, &selection);
        Self {
            taxonomy,
            loader,
            selection,
            focus: Focus::Sections,
            page,
            scroll: 0,
            banner,
            message: None,
        }
    }

    /// Recompose the page for the current selection and return to its top.
    pub fn refresh(&mut self) {
        self.page = compose(&self.taxonomy, &self.loader, &self.selection);
        self.scroll = 0;
    }

    /// Re-read content without moving, keeping the scroll position.
    pub fn reload(&mut self) {
        let scroll = self.scroll;
        self.refresh();
        self.scroll = scroll;
        self.message = Some(format!("Reloaded {}", self.page.source_path));
    }

    #[must_use]
    /// Position of the active section in display order.
    pub fn section_position(&self) -> usize {
        self.taxonomy
            .position(self.selection.section())
            .unwrap_or_default()
    }

    /// Select the section at display position `position`, if there is one.
    pub fn select_section_at(&mut self, position: usize) {
        if let Some(section) = self.taxonomy.sections().get(position) {
            let id = section.id();
            self.selection.select_section(&self.taxonomy, id);
            self.refresh();
        }
    }

    /// Select subsection `index` of the active section.
    pub fn select_subsection(&mut self, index: usize) {
        self.selection.select_subsection(&self.taxonomy, index);
        self.refresh();
    }

    /// Switch between the default and alternate locale.
    pub fn toggle_locale(&mut self) {
        let locale = self.selection.locale().toggled();
        self.selection.select_locale(&self.taxonomy, locale);
        self.refresh();
        self.message = Some(format!("Locale: {}", locale.native_name()));
    }

    /// Handle an up arrow in the focused pane.
    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Sections => {
                if let Some(prev) = self.section_position().checked_sub(1) {
                    self.select_section_at(prev);
                }
            }
            Focus::Subsections => {
                if let Some(prev) = self.selection.subsection().checked_sub(1) {
                    self.select_subsection(prev);
                }
            }
            Focus::Content => self.scroll_by(-1),
        }
    }

    /// Handle a down arrow in the focused pane.
    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Sections => {
                let next = self.section_position() + 1;
                self.select_section_at(next);
            }
            Focus::Subsections => {
                let next = self.selection.subsection() + 1;
                if next < self.taxonomy.subsection_count(self.selection.section()) {
                    self.select_subsection(next);
                }
            }
            Focus::Content => self.scroll_by(1),
        }
    }

    /// Scroll the content pane, clamped to the body's line count.
    pub fn scroll_by(&mut self, delta: i32) {
        let last_line = self.page.body.lines().count().saturating_sub(1);
        let max = u16::try_from(last_line).unwrap_or(u16::MAX);
        let target = i32::from(self.scroll).saturating_add(delta).clamp(0, i32::from(max));
        self.scroll = u16::try_from(target).unwrap_or(max);
    }

    /// Move focus to the next pane.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous pane.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
