use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use foliotui::model::Model;

use super::theme::Palette;

/// Status parts as "Label: value" strings (extracted for testability)
fn build_status_parts(model: &Model) -> Vec<String> {
    let nav = &model.navigation;
    let mut parts = vec![
        format!("Theme: {}", nav.current_theme()),
        format!(
            "Page: {}/{}",
            nav.selected().index().map_or(0, |i| i + 1),
            foliotui::pages::PAGES.len()
        ),
    ];

    // Feed health is only known once a cycle has run
    if model.feed.is_refreshing() {
        parts.push("Feeds: loading".to_string());
    } else if !model.feed.is_loading() {
        let (ok, total) = model.feed.source_summary();
        parts.push(format!("Feeds: {}/{} sources ok", ok, total));
    }

    parts
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let mut spans = vec![];
    for (idx, part) in build_status_parts(model).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" │ "));
        }
        // Color the label (before the first colon)
        match part.find(':') {
            Some(colon_pos) => {
                spans.push(Span::styled(
                    part[..=colon_pos].to_string(),
                    Style::default().fg(Color::Yellow),
                ));
                spans.push(Span::raw(part[colon_pos + 1..].to_string()));
            }
            None => spans.push(Span::raw(part.clone())),
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status")
                .border_style(palette.border(false)),
        )
        .style(Style::default().fg(palette.muted).bg(palette.background));

    f.render_widget(status_bar, area);
}
