use ratatui::{widgets::Block, Frame};

use crate::App;

use super::{layout, legend, nav_bar, pages, status_bar, theme::Palette, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let palette = Palette::new(app.model.navigation.accent_rgb(), app.model.navigation.mode);

    // Paint the page background in the current mode
    f.render_widget(Block::default().style(palette.base()), size);

    let page = app.model.selected_page();
    let editing = app.model.contact.is_editing();
    let submitted = app.model.contact.is_submitted();

    let legend_height = legend::calculate_legend_height(size.width, page, editing, submitted);
    let layout_info = layout::calculate_layout(size, legend_height);

    nav_bar::render_nav_bar(f, layout_info.nav_area, &app.model.navigation, &palette);
    pages::render_page(f, layout_info.body_area, app, &palette);
    legend::render_legend(f, layout_info.legend_area, page, editing, submitted);
    status_bar::render_status_bar(f, layout_info.status_area, &app.model, &palette);

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message, &palette);
    }
}
