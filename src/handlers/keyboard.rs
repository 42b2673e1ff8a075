//! Keyboard Input Handler
//!
//! Global keys switch pages and modes; the rest depends on the mounted page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use foliotui::logic;
use foliotui::model::ContactField;
use foliotui::pages::Page;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere, even mid-edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    // Text entry swallows every other key while the form is being edited
    if app.model.selected_page() == Page::Contact && app.model.contact.is_editing() {
        handle_contact_editing(app, key);
        return;
    }

    let page = app.model.selected_page();

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('m') => {
            app.model.navigation.toggle_mode();
            log::debug!("theme: {}", app.model.navigation.current_theme());
        }
        KeyCode::Tab => {
            let command = app.model.next_page();
            app.run_command(command);
        }
        KeyCode::BackTab => {
            let command = app.model.prev_page();
            app.run_command(command);
        }

        // Projects: arrows drive the paginator and card selection
        KeyCode::Left if page == Page::Projects => {
            app.model.projects.prev_page();
        }
        KeyCode::Right if page == Page::Projects => {
            app.model.projects.next_page();
        }
        KeyCode::Up if page == Page::Projects => app.model.projects.select_prev(),
        KeyCode::Down if page == Page::Projects => app.model.projects.select_next(),
        KeyCode::Char(c) if page == Page::Projects && c.is_ascii_digit() => {
            if let Some(n) = c.to_digit(10) {
                app.model.projects.go_to_page(n as usize);
            }
        }
        KeyCode::Enter | KeyCode::Char('o') if page == Page::Projects => {
            app.open_selected_project();
        }

        // Blogs: tile selection, open, refresh
        KeyCode::Up if page == Page::Blogs => app.model.feed.select_prev(),
        KeyCode::Down if page == Page::Blogs => app.model.feed.select_next(),
        KeyCode::Enter | KeyCode::Char('o') if page == Page::Blogs => {
            app.open_selected_post();
        }
        KeyCode::Char('r') if page == Page::Blogs => {
            app.refresh_feed();
        }

        KeyCode::Enter | KeyCode::Char('o') if page == Page::Resume => {
            app.open_resume();
        }

        // Contact (not editing)
        KeyCode::Enter | KeyCode::Char('e') if page == Page::Contact => {
            if !app.model.contact.is_submitted() {
                app.model.contact.start_editing();
            }
        }
        KeyCode::Char('o') if page == Page::Contact => {
            app.open_contact_link();
        }

        // Remaining arrows: switch pages or scroll text
        KeyCode::Left => {
            let command = app.model.prev_page();
            app.run_command(command);
        }
        KeyCode::Right => {
            let command = app.model.next_page();
            app.run_command(command);
        }
        KeyCode::Up => app.model.ui.scroll_up(),
        KeyCode::Down => app.model.ui.scroll_down(),

        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(target) = c.to_digit(10).and_then(logic::navigation::page_for_digit) {
                let command = app.model.navigate(target);
                app.run_command(command);
            }
        }
        _ => {}
    }
}

/// Keys while a contact field has focus
fn handle_contact_editing(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        submit_contact_form(app);
        return;
    }

    let form = &mut app.model.contact;
    match key.code {
        KeyCode::Esc => form.stop_editing(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

/// Submit only when every field is filled and the email looks sane
fn submit_contact_form(app: &mut App) {
    if let Some(blocker) = logic::contact::submit_blocker(&app.model.contact) {
        // Move focus to the offending field
        app.model.contact.focused = Some(match blocker {
            logic::contact::SubmitBlocker::Missing(field) => field,
            logic::contact::SubmitBlocker::InvalidEmail => ContactField::Email,
        });
        app.model.show_toast(blocker.message());
        return;
    }

    let form = &app.model.contact;
    log::info!(
        "contact form submitted (name {} chars, email {} chars, message {} chars)",
        form.value(ContactField::Name).chars().count(),
        form.value(ContactField::Email).chars().count(),
        form.value(ContactField::Message).chars().count()
    );
    app.model.contact.submit();
}
