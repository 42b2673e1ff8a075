use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foliotui::content;
use foliotui::model::{ContactField, ContactForm};

use super::pages::page_block;
use super::theme::Palette;

/// Render the Contact page: chat link plus the form or its confirmation
pub fn render_contact(
    f: &mut Frame,
    area: Rect,
    title: &str,
    form: &ContactForm,
    contact_link: &str,
    palette: &Palette,
) {
    let block = page_block(title, palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary + chat link
            Constraint::Min(3),    // Form or confirmation
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(content::CONTACT_SUMMARY, palette.muted())),
        Line::default(),
        Line::from(vec![
            Span::raw("💬 WhatsApp: "),
            Span::styled(
                contact_link.to_string(),
                palette.accent_bold().add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(header, chunks[0]);

    if form.is_submitted() {
        f.render_widget(
            Paragraph::new(Span::styled(content::CONTACT_CONFIRMATION, palette.accent_bold()))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );
        return;
    }

    let field_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(chunks[1]);

    for (field, field_area) in ContactField::ALL.into_iter().zip(field_areas.iter()) {
        render_field(f, *field_area, form, field, palette);
    }
}

fn render_field(f: &mut Frame, area: Rect, form: &ContactForm, field: ContactField, palette: &Palette) {
    let focused = form.focused == Some(field);
    let value = form.value(field);

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(field.placeholder(), palette.muted()))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(palette.text))];
        if focused {
            spans.push(Span::styled("▏", palette.accent_bold()));
        }
        Line::from(spans)
    };

    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(palette.border(focused))
                .style(Style::default().bg(palette.surface)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}
