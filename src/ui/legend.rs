use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use foliotui::pages::Page;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(page: Page, contact_editing: bool, contact_submitted: bool) -> Vec<Span<'static>> {
    // Typing into the form: only editing keys apply
    if page == Page::Contact && contact_editing {
        return vec![
            key("Tab/↓"),
            Span::raw(":Next field  "),
            key("S-Tab/↑"),
            Span::raw(":Prev field  "),
            key("Enter"),
            Span::raw(":Send  "),
            key("Esc"),
            Span::raw(":Stop editing  "),
            key("^C"),
            Span::raw(":Quit"),
        ];
    }

    let mut hotkey_spans = vec![key("Tab/S-Tab"), Span::raw(":Pages  ")];

    match page {
        Page::Projects => {
            hotkey_spans.extend(vec![
                key("←/→"),
                Span::raw(":Prev/Next page  "),
                key("1-9"),
                Span::raw(":Go to page  "),
                key("↑/↓"),
                Span::raw(":Select  "),
                key("Enter"),
                Span::raw(":Open project  "),
            ]);
        }
        Page::Blogs => {
            hotkey_spans.extend(vec![
                key("←/→"),
                Span::raw(":Pages  "),
                key("↑/↓"),
                Span::raw(":Select  "),
                key("Enter"),
                Span::raw(":Read post  "),
                key("r"),
                Span::raw(":Refresh  "),
            ]);
        }
        Page::Resume => {
            hotkey_spans.extend(vec![
                key("←/→"),
                Span::raw(":Pages  "),
                key("Enter"),
                Span::raw(":Open resume  "),
            ]);
        }
        Page::Contact => {
            hotkey_spans.extend(vec![key("←/→"), Span::raw(":Pages  ")]);
            if !contact_submitted {
                hotkey_spans.extend(vec![key("e"), Span::raw(":Edit form  ")]);
            }
            hotkey_spans.extend(vec![key("o"), Span::raw(":Open chat  ")]);
        }
        Page::About | Page::Education | Page::Work | Page::Research => {
            hotkey_spans.extend(vec![
                key("←/→"),
                Span::raw(":Pages  "),
                key("↑/↓"),
                Span::raw(":Scroll  "),
            ]);
        }
    }

    // Digits are page numbers on Projects
    if page != Page::Projects {
        hotkey_spans.extend(vec![key("1-8"), Span::raw(":Jump  ")]);
    }

    hotkey_spans.extend(vec![
        key("m"),
        Span::raw(":Dark/Light  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(page: Page, contact_editing: bool, contact_submitted: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(page, contact_editing, contact_submitted));

    Paragraph::new(hotkey_line)
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

/// Render the hotkey legend for the mounted page
pub fn render_legend(f: &mut Frame, area: Rect, page: Page, contact_editing: bool, contact_submitted: bool) {
    f.render_widget(
        build_legend_paragraph(page, contact_editing, contact_submitted),
        area,
    );
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    page: Page,
    contact_editing: bool,
    contact_submitted: bool,
) -> u16 {
    // Count lines without the block; line_count() miscounts with borders attached
    let paragraph_for_counting =
        Paragraph::new(Line::from(build_hotkey_spans(page, contact_editing, contact_submitted)))
            .wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_projects_shows_paging() {
        let text = spans_to_text(&build_hotkey_spans(Page::Projects, false, false));
        assert!(text.contains("Prev/Next page"), "got: {}", text);
        assert!(text.contains("Go to page"), "got: {}", text);
        assert!(!text.contains("1-8"), "digits are page numbers here, got: {}", text);
    }

    #[test]
    fn test_legend_blogs_shows_refresh() {
        let text = spans_to_text(&build_hotkey_spans(Page::Blogs, false, false));
        assert!(text.contains("r:Refresh"), "got: {}", text);
    }

    #[test]
    fn test_legend_contact_editing_hides_global_keys() {
        let text = spans_to_text(&build_hotkey_spans(Page::Contact, true, false));
        assert!(text.contains("Enter:Send"), "got: {}", text);
        assert!(!text.contains("q:Quit"), "q types a letter while editing, got: {}", text);
    }

    #[test]
    fn test_legend_contact_submitted_hides_edit() {
        let open = spans_to_text(&build_hotkey_spans(Page::Contact, false, false));
        let done = spans_to_text(&build_hotkey_spans(Page::Contact, false, true));
        assert!(open.contains("e:Edit form"));
        assert!(!done.contains("e:Edit form"));
        assert!(done.contains("o:Open chat"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, Page::Projects, false, false);
        let narrow = calculate_legend_height(30, Page::Projects, false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
