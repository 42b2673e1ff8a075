use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use foliotui::content;
use foliotui::logic;
use foliotui::model::NavigationModel;
use foliotui::pages::PAGES;

use super::theme::Palette;

/// Tab label for one page; compact labels drop the name
fn tab_label(icon: &str, name: &str, compact: bool) -> String {
    if compact {
        format!(" {} ", icon)
    } else {
        format!(" {} {} ", icon, name)
    }
}

fn tabs_width(compact: bool) -> usize {
    PAGES
        .iter()
        .map(|d| tab_label(d.icon, d.name, compact).width() + 1)
        .sum()
}

/// Render the top bar: owner name, one tab per page, mode toggle
pub fn render_nav_bar(f: &mut Frame, area: Rect, navigation: &NavigationModel, palette: &Palette) {
    let toggle = logic::ui::mode_toggle_label(navigation.mode);
    let owner = format!("{}  ", content::OWNER_NAME);

    // Fall back to icon-only tabs when the full row does not fit
    let inner_width = area.width.saturating_sub(2) as usize;
    let compact = owner.width() + tabs_width(false) + toggle.width() + 2 > inner_width;

    let mut spans = vec![Span::styled(owner, palette.accent_bold())];
    for desc in PAGES.iter() {
        let label = tab_label(desc.icon, desc.name, compact);
        let style = if desc.page == navigation.selected() {
            palette.selected()
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(format!(" {}", toggle), palette.muted()));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .style(palette.base()),
    );

    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_tabs_are_narrower() {
        assert!(tabs_width(true) < tabs_width(false));
    }

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label("🚀", "Projects", false), " 🚀 Projects ");
        assert_eq!(tab_label("🚀", "Projects", true), " 🚀 ");
    }
}
