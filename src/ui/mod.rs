// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Palette derived from the page accent and the display mode
// - layout: Calculates screen layout (header, body, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - nav_bar: Renders the top bar (owner name, page tabs, mode toggle)
// - pages: Dispatches the mounted page to its body renderer
// - projects / blogs / contact: Bodies of the interactive pages
// - legend: Renders hotkey legend for the mounted page
// - status_bar: Renders bottom status bar (theme key, feed health)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod blogs;
pub mod contact;
pub mod layout;
pub mod legend;
pub mod nav_bar;
pub mod pages;
pub mod projects;
pub mod render;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
