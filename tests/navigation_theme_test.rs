//! Integration tests for page selection and theme derivation
//!
//! Covers the navigation flow a user drives with the keyboard:
//! selecting pages by id, cycling tabs, toggling the display mode.

use std::collections::HashSet;

use foliotui::model::{Command, Model};
use foliotui::pages::{self, Page, PageError, PAGES};
use foliotui::DisplayMode;

/// Test: registry ids are unique and every variant is registered once
#[test]
fn test_registry_is_complete_and_unique() {
    let ids: HashSet<&str> = PAGES.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), PAGES.len());

    for desc in PAGES.iter() {
        assert_eq!(Page::from_id(desc.id), Some(desc.page));
        assert_eq!(desc.page.descriptor().map(|d| d.id), Some(desc.id));
    }
}

/// Test: theme key is family + mode, recomputed after every change
#[test]
fn test_theme_key_tracks_page_and_mode() {
    let mut model = Model::default();
    assert_eq!(model.navigation.current_theme(), "emerald-dark");

    model.navigation.toggle_mode();
    assert_eq!(model.navigation.current_theme(), "emerald-light");

    model.navigate_id("projects");
    assert_eq!(model.navigation.current_theme(), "cyan-light");

    model.navigation.toggle_mode();
    model.navigate_id("contact");
    assert_eq!(model.navigation.current_theme(), "deep-blue-dark");
}

/// Test: every page has a theme family and an accent
#[test]
fn test_every_page_has_family_and_accent() {
    let expected = [
        ("about", "emerald"),
        ("education", "electric-blue"),
        ("work", "purple"),
        ("projects", "cyan"),
        ("resume", "orange"),
        ("blogs", "pink"),
        ("research", "coral"),
        ("contact", "deep-blue"),
    ];
    for (id, family) in expected {
        assert_eq!(pages::theme_family_for_id(id).map(|f| f.as_str()), Ok(family));
        let page = Page::from_id(id).unwrap();
        assert_eq!(Some(page.accent_rgb()), pages::parse_hex_color(page.descriptor().unwrap().color));
    }
}

/// Test: string-keyed family lookup rejects unregistered ids
#[test]
fn test_theme_family_for_unknown_id_is_error() {
    assert_eq!(
        pages::theme_family_for_id("gallery"),
        Err(PageError::UnknownPage("gallery".to_string()))
    );
}

/// Test: unknown ids leave the previous page and mode untouched
#[test]
fn test_unknown_page_is_noop() {
    let mut model = Model::new(Page::Work, DisplayMode::Light);
    assert_eq!(model.navigate_id(""), None);
    assert_eq!(model.navigate_id("WORK "), None);
    assert_eq!(model.selected_page(), Page::Work);
    assert_eq!(model.navigation.mode, DisplayMode::Light);
}

/// Test: cycling forward through all pages returns to the start
#[test]
fn test_tab_cycle_visits_every_page_once() {
    let mut model = Model::default();
    let mut seen = Vec::new();
    for _ in 0..PAGES.len() {
        seen.push(model.selected_page());
        model.next_page();
    }
    assert_eq!(model.selected_page(), Page::About);
    assert_eq!(seen, PAGES.iter().map(|d| d.page).collect::<Vec<_>>());
}

/// Test: only entering Blogs issues a fetch, and each entry gets a new token
#[test]
fn test_blogs_entry_issues_fresh_token() {
    let mut model = Model::default();
    for page in [Page::Education, Page::Work, Page::Projects, Page::Resume] {
        assert_eq!(model.navigate(page), None);
    }

    assert_eq!(model.navigate(Page::Blogs), Some(Command::FetchFeeds { token: 1 }));
    model.navigate(Page::Research);
    assert_eq!(model.navigate(Page::Blogs), Some(Command::FetchFeeds { token: 2 }));
}

/// Test: starting on Blogs mounts it immediately
#[test]
fn test_start_on_blogs_mounts_feed() {
    let mut model = Model::new(Page::Blogs, DisplayMode::Dark);
    assert_eq!(model.mount_selected(), Some(Command::FetchFeeds { token: 1 }));
    assert!(model.feed.is_loading());
}
