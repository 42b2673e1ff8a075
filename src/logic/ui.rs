//! UI state transition logic
//!
//! Pure functions for UI state toggles and timers.

use crate::DisplayMode;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Flip between dark and light mode
///
/// # Examples
/// ```
/// use foliotui::DisplayMode;
/// use foliotui::logic::ui::toggle_display_mode;
///
/// assert_eq!(toggle_display_mode(DisplayMode::Dark), DisplayMode::Light);
/// assert_eq!(toggle_display_mode(DisplayMode::Light), DisplayMode::Dark);
/// ```
pub fn toggle_display_mode(current: DisplayMode) -> DisplayMode {
    match current {
        DisplayMode::Dark => DisplayMode::Light,
        DisplayMode::Light => DisplayMode::Dark,
    }
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Label of the mode toggle ("switch to" the other mode)
pub fn mode_toggle_label(current: DisplayMode) -> &'static str {
    match current {
        DisplayMode::Dark => "☀ Light",
        DisplayMode::Light => "☾ Dark",
    }
}
