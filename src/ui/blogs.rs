use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foliotui::content;
use foliotui::logic;
use foliotui::model::{FeedItem, FeedModel};

use super::pages::page_block;
use super::theme::Palette;

/// Rows per blog tile, borders included
const TILE_HEIGHT: u16 = 6;

/// First tile to draw so that `selected` stays on screen
fn window_start(selected: Option<usize>, per_screen: usize) -> usize {
    selected.unwrap_or(0).saturating_sub(per_screen.saturating_sub(1))
}

/// Render the Blogs page: loading indicator, empty state, or tiles
pub fn render_blogs(f: &mut Frame, area: Rect, title: &str, feed: &FeedModel, palette: &Palette) {
    let block = page_block(title, palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(content::BLOGS_SUMMARY, palette.muted())),
        chunks[0],
    );

    if feed.is_loading() {
        f.render_widget(
            Paragraph::new(Span::styled("⏳ Loading posts...", palette.accent_bold())),
            chunks[1],
        );
        return;
    }

    let items = feed.items();
    if items.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No posts to show", palette.muted())),
            chunks[1],
        );
        return;
    }

    let per_screen = ((chunks[1].height / TILE_HEIGHT) as usize).max(1);
    let start = window_start(feed.selected_index, per_screen);
    let shown: Vec<(usize, &FeedItem)> = items.iter().enumerate().skip(start).take(per_screen).collect();

    let tile_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); shown.len()])
        .split(chunks[1]);

    for ((idx, item), tile_area) in shown.into_iter().zip(tile_areas.iter()) {
        render_tile(f, *tile_area, item, feed.selected_index == Some(idx), palette);
    }
}

fn render_tile(f: &mut Frame, area: Rect, item: &FeedItem, selected: bool, palette: &Palette) {
    let title_style = if selected {
        palette.selected()
    } else {
        palette.accent_bold()
    };

    let mut lines = vec![Line::from(item.description.clone())];
    if let Some(date) = logic::feed::format_published(item.published) {
        lines.push(Line::from(Span::styled(format!("📅 {}", date), palette.muted())));
    }
    lines.push(Line::from(Span::styled(
        item.link.clone(),
        palette.muted().add_modifier(Modifier::UNDERLINED),
    )));

    let tile = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", item.title), title_style))
                .border_style(palette.border(selected))
                .style(Style::default().bg(palette.surface)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(tile, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_keeps_selection_visible() {
        assert_eq!(window_start(None, 3), 0);
        assert_eq!(window_start(Some(1), 3), 0);
        assert_eq!(window_start(Some(5), 3), 3);
        assert_eq!(window_start(Some(5), 1), 5);
    }
}
