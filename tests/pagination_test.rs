//! Integration tests for the Projects paginator

use foliotui::content;
use foliotui::logic::pagination::Paginator;
use foliotui::model::Model;
use foliotui::pages::Page;

/// Test: N=9, P=2 → 5 pages, page 5 shows only the last record
#[test]
fn test_nine_records_two_per_page() {
    let records: Vec<u32> = (0..9).collect();
    let mut pager = Paginator::new(records.len(), 2);
    assert_eq!(pager.page_count(), 5);

    pager.go_to(5);
    assert_eq!(pager.page_items(&records), &[8]);
    assert!(!pager.can_next());
    assert!(!pager.next());
    assert_eq!(pager.current(), 5);
}

/// Test: the page slices partition the list in order
#[test]
fn test_pages_cover_every_record_once() {
    let records: Vec<u32> = (0..7).collect();
    let mut pager = Paginator::new(records.len(), 3);

    let mut seen = pager.page_items(&records).to_vec();
    while pager.next() {
        seen.extend_from_slice(pager.page_items(&records));
    }
    assert_eq!(seen, records);
}

/// Test: prev at page 1 is a no-op
#[test]
fn test_prev_at_first_page() {
    let mut pager = Paginator::new(4, 2);
    assert!(!pager.can_prev());
    assert!(!pager.prev());
    assert_eq!(pager.current(), 1);
}

/// Test: no records → no pages, both controls disabled
#[test]
fn test_empty_list() {
    let empty: Vec<u32> = Vec::new();
    let mut pager = Paginator::new(0, 2);
    assert_eq!(pager.page_count(), 0);
    assert_eq!(pager.current(), 1);
    assert!(pager.page_items(&empty).is_empty());
    assert!(!pager.can_prev() && !pager.can_next());

    pager.go_to(3);
    assert_eq!(pager.current(), 1);
}

/// Test: the bundled projects span two pages
#[test]
fn test_bundled_projects_paginate() {
    let mut model = Model::default();
    model.navigate(Page::Projects);

    assert_eq!(model.projects.pager.page_count(), 2);
    let first: Vec<&str> = model.projects.visible().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(first, vec!["AI Scheduler", "A11y Audit Pro"]);

    model.projects.next_page();
    let second: Vec<&str> = model.projects.visible().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(second, vec!["Github Analyzer"]);
    assert_eq!(content::PROJECTS_PER_PAGE, 2);
}

/// Test: leaving Projects and coming back starts on page 1 again
#[test]
fn test_remount_resets_to_first_page() {
    let mut model = Model::default();
    model.navigate(Page::Projects);
    model.projects.go_to_page(2);
    model.projects.select_next();

    model.navigate(Page::Blogs);
    model.navigate(Page::Projects);
    assert_eq!(model.projects.pager.current(), 1);
    assert_eq!(model.projects.selected_on_page, Some(0));
}
