//! Page bodies
//!
//! One renderer per [`Page`] variant. The dispatch is an exhaustive match,
//! so adding a page without a body does not compile.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foliotui::content;
use foliotui::pages::Page;

use super::layout::centered_column;
use super::theme::Palette;
use super::{blogs, contact, projects};
use crate::App;

/// Widest the body text column gets
const BODY_MAX_WIDTH: u16 = 100;

/// Render the mounted page into `area`
pub fn render_page(f: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let page = app.model.selected_page();
    let title = format!(" {} {} ", page.icon(), page.name());
    let column = centered_column(area, BODY_MAX_WIDTH);

    match page {
        Page::About => {
            let lines = about_lines(palette);
            render_text_page(f, column, &title, lines, &mut app.model.ui.scroll_offset, palette);
        }
        Page::Education => {
            let lines = education_lines(palette);
            render_text_page(f, column, &title, lines, &mut app.model.ui.scroll_offset, palette);
        }
        Page::Work => {
            let lines = work_lines(palette);
            render_text_page(f, column, &title, lines, &mut app.model.ui.scroll_offset, palette);
        }
        Page::Resume => {
            let lines = resume_lines(&app.resume_path, palette);
            render_text_page(f, column, &title, lines, &mut app.model.ui.scroll_offset, palette);
        }
        Page::Research => {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(content::RESEARCH_SUMMARY, palette.muted())),
            ];
            render_text_page(f, column, &title, lines, &mut app.model.ui.scroll_offset, palette);
        }
        Page::Projects => projects::render_projects(f, column, &title, &app.model.projects, palette),
        Page::Blogs => blogs::render_blogs(f, column, &title, &app.model.feed, palette),
        Page::Contact => contact::render_contact(
            f,
            column,
            &title,
            &app.model.contact,
            &app.contact_link,
            palette,
        ),
    }
}

/// Bordered block used by every page body
pub fn page_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, palette.accent_bold()))
        .border_style(palette.border(true))
        .style(palette.base())
}

/// Wrapped, scrollable text body; clamps `scroll` to the content
fn render_text_page(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    scroll: &mut u16,
    palette: &Palette,
) {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = paragraph.line_count(inner_width).saturating_sub(inner_height);
    *scroll = (*scroll).min(max_scroll as u16);

    f.render_widget(
        paragraph.block(page_block(title, palette)).scroll((*scroll, 0)),
        area,
    );
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, palette.accent_bold()))
}

fn bullet(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(palette.accent)),
        Span::raw(text),
    ])
}

fn about_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            content::OWNER_NAME,
            palette.accent_bold().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            content::ROLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content::TAGLINE,
            palette.muted().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(content::BIO),
        Line::default(),
    ];

    for group in content::SKILL_GROUPS {
        lines.push(heading(group.title, palette));
        lines.push(Line::from(format!("  {}", group.skills.join(" · "))));
        lines.push(Line::default());
    }
    lines
}

fn education_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(content::EDUCATION_SUMMARY, palette.muted())),
        Line::default(),
    ];

    for entry in content::EDUCATION {
        lines.push(heading(entry.degree, palette));
        lines.push(Line::from(Span::styled(
            entry.field,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("{}  ({})", entry.institution, entry.duration)));
        for detail in entry.details {
            lines.push(bullet(detail, palette));
        }
        lines.push(Line::default());
    }
    lines
}

fn work_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(content::WORK_SUMMARY, palette.muted())),
        Line::default(),
    ];

    // Timeline: period marker, then role and summary
    for entry in content::WORK_HISTORY {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(palette.accent)),
            Span::styled(entry.period, palette.muted()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("│ ", Style::default().fg(palette.accent)),
            Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("│ ", Style::default().fg(palette.accent)),
            Span::raw(entry.summary),
        ]));
        lines.push(Line::default());
    }
    lines
}

fn resume_lines(resume_path: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(content::RESUME_SUMMARY),
        Line::default(),
        Line::from(vec![
            Span::styled("📄 ", Style::default()),
            Span::styled(resume_path.to_string(), palette.accent_bold()),
        ]),
        Line::default(),
        Line::from(Span::styled("Press Enter to open the resume", palette.muted())),
    ]
}
