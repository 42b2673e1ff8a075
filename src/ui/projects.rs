use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foliotui::content;
use foliotui::logic::pagination::Paginator;
use foliotui::model::{ProjectRecord, ProjectsModel};

use super::pages::page_block;
use super::theme::Palette;

/// Render the Projects page: summary, current page of cards, page controls
pub fn render_projects(f: &mut Frame, area: Rect, title: &str, projects: &ProjectsModel, palette: &Palette) {
    let block = page_block(title, palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Summary
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Pagination controls
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(content::PROJECTS_SUMMARY, palette.muted())),
        chunks[0],
    );

    let visible = projects.visible();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No projects yet", palette.muted())),
            chunks[1],
        );
    } else {
        let card_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, visible.len() as u32); visible.len()])
            .split(chunks[1]);

        for (idx, (project, card_area)) in visible.iter().zip(card_areas.iter()).enumerate() {
            let selected = projects.selected_on_page == Some(idx);
            render_card(f, *card_area, project, selected, palette);
        }
    }

    f.render_widget(
        Paragraph::new(pagination_line(&projects.pager, palette)),
        chunks[2],
    );
}

fn render_card(f: &mut Frame, area: Rect, project: &ProjectRecord, selected: bool, palette: &Palette) {
    let title_style = if selected {
        palette.selected()
    } else {
        palette.accent_bold()
    };

    let mut lines = vec![
        Line::from(project.description.clone()),
        Line::default(),
        Line::from(
            project
                .tags
                .iter()
                .flat_map(|tag| {
                    [
                        Span::styled(format!("[{}]", tag), Style::default().fg(palette.accent)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    ];
    if let Some(link) = &project.link {
        lines.push(Line::from(Span::styled(
            format!("🔗 {}", link),
            palette.muted().add_modifier(Modifier::UNDERLINED),
        )));
    }

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", project.title), title_style))
                .border_style(palette.border(selected))
                .style(Style::default().bg(palette.surface)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(card, area);
}

/// "◀ Prev  1 [2] 3  Next ▶" with disabled controls dimmed
fn pagination_line(pager: &Paginator, palette: &Palette) -> Line<'static> {
    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, palette.accent_bold())
        } else {
            Span::styled(label, palette.muted().add_modifier(Modifier::DIM))
        }
    };

    let mut spans = vec![control("◀ Prev ", pager.can_prev())];
    for page in 1..=pager.page_count() {
        if page == pager.current() {
            spans.push(Span::styled(format!("[{}]", page), palette.selected()));
        } else {
            spans.push(Span::styled(format!(" {} ", page), Style::default().fg(palette.text)));
        }
    }
    spans.push(control(" Next ▶", pager.can_next()));
    Line::from(spans)
}
