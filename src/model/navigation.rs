//! Navigation Model
//!
//! This sub-model holds which page is selected and which display mode is
//! active, and derives the composite theme key and the accent color.

use crate::logic;
use crate::pages::{self, Page, PageDescriptor, ThemeFamily};
use crate::DisplayMode;

/// Navigation state (selected page, display mode)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    /// Currently mounted page
    selected: Page,

    /// Dark or light background
    pub mode: DisplayMode,
}

impl NavigationModel {
    /// Create navigation state on the About page in dark mode
    pub fn new() -> Self {
        Self {
            selected: Page::About,
            mode: DisplayMode::Dark,
        }
    }

    pub fn selected(&self) -> Page {
        self.selected
    }

    /// Registry entry of the selected page
    pub fn descriptor(&self) -> Option<&'static PageDescriptor> {
        self.selected.descriptor()
    }

    /// Select a page by identifier
    ///
    /// Unknown identifiers are ignored and return `false`; the previous
    /// page stays selected.
    pub fn select_page(&mut self, id: &str) -> bool {
        match Page::from_id(id) {
            Some(page) => {
                self.selected = page;
                true
            }
            None => false,
        }
    }

    /// Select a page directly
    pub fn select(&mut self, page: Page) {
        self.selected = page;
    }

    /// Move to the next tab (wraps)
    pub fn next_page(&mut self) {
        self.selected = logic::navigation::page_after(self.selected);
    }

    /// Move to the previous tab (wraps)
    pub fn prev_page(&mut self) {
        self.selected = logic::navigation::page_before(self.selected);
    }

    /// Flip dark/light mode
    pub fn toggle_mode(&mut self) {
        self.mode = logic::ui::toggle_display_mode(self.mode);
    }

    pub fn theme_family(&self) -> ThemeFamily {
        pages::theme_family(self.selected)
    }

    /// Composite theme key, e.g. `emerald-dark`
    pub fn current_theme(&self) -> String {
        format!("{}-{}", self.theme_family().as_str(), self.mode.as_str())
    }

    /// Accent color of the selected page
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        self.selected.accent_rgb()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PAGES;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert_eq!(model.selected(), Page::About);
        assert_eq!(model.mode, DisplayMode::Dark);
        assert_eq!(model.current_theme(), "emerald-dark");
    }

    #[test]
    fn test_select_every_registered_page() {
        let mut model = NavigationModel::new();
        for desc in PAGES.iter() {
            assert!(model.select_page(desc.id));
            assert_eq!(model.selected().id(), desc.id);
        }
    }

    #[test]
    fn test_select_unknown_page_is_noop() {
        let mut model = NavigationModel::new();
        model.select_page("projects");
        assert!(!model.select_page("nonexistent"));
        assert_eq!(model.selected(), Page::Projects);
    }

    #[test]
    fn test_toggle_mode_changes_theme_key() {
        let mut model = NavigationModel::new();
        model.toggle_mode();
        assert_eq!(model.current_theme(), "emerald-light");
        model.toggle_mode();
        assert_eq!(model.current_theme(), "emerald-dark");
    }

    #[test]
    fn test_theme_follows_page() {
        let mut model = NavigationModel::new();
        model.select(Page::Education);
        assert_eq!(model.current_theme(), "electric-blue-dark");
        assert_eq!(model.accent_rgb(), (0, 124, 240));
    }
}
