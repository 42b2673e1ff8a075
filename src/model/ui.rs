//! UI Model
//!
//! Transient visual state: toast, scroll position of text pages, quit flag.

use std::time::Instant;

/// Toasts and visual state
#[derive(Clone, Debug, Default)]
pub struct UiModel {
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Vertical scroll of the page body (text-heavy pages)
    pub scroll_offset: u16,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if the toast has been visible long enough
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => {
                crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
            }
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
