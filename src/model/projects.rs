//! Projects Model
//!
//! The static project list, the paginator over it, and the selected card on
//! the current page.

use crate::logic;
use crate::logic::pagination::Paginator;
use crate::model::types::ProjectRecord;

#[derive(Clone, Debug)]
pub struct ProjectsModel {
    records: Vec<ProjectRecord>,
    pub pager: Paginator,
    /// Selected card, relative to the current page
    pub selected_on_page: Option<usize>,
}

impl ProjectsModel {
    pub fn new(records: Vec<ProjectRecord>, page_size: usize) -> Self {
        let pager = Paginator::new(records.len(), page_size);
        let mut model = Self {
            records,
            pager,
            selected_on_page: None,
        };
        model.reset();
        model
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Cards on the current page
    pub fn visible(&self) -> &[ProjectRecord] {
        self.pager.page_items(&self.records)
    }

    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        self.selected_on_page.and_then(|idx| self.visible().get(idx))
    }

    /// Back to page 1 with the first card selected
    pub fn reset(&mut self) {
        self.pager.reset();
        self.selected_on_page = logic::navigation::clamp_selection(None, self.visible().len());
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next();
        if moved {
            self.selected_on_page = logic::navigation::clamp_selection(None, self.visible().len());
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.prev();
        if moved {
            self.selected_on_page = logic::navigation::clamp_selection(None, self.visible().len());
        }
        moved
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page);
        self.selected_on_page = logic::navigation::clamp_selection(None, self.visible().len());
    }

    pub fn select_next(&mut self) {
        self.selected_on_page =
            logic::navigation::next_selection(self.selected_on_page, self.visible().len());
    }

    pub fn select_prev(&mut self) {
        self.selected_on_page =
            logic::navigation::prev_selection(self.selected_on_page, self.visible().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<ProjectRecord> {
        (0..n)
            .map(|i| ProjectRecord::new(&format!("P{}", i), "desc", None, &[]))
            .collect()
    }

    #[test]
    fn test_starts_on_first_page_with_first_card() {
        let model = ProjectsModel::new(records(3), 2);
        assert_eq!(model.pager.current(), 1);
        assert_eq!(model.visible().len(), 2);
        assert_eq!(model.selected_project().map(|p| p.title.as_str()), Some("P0"));
    }

    #[test]
    fn test_next_page_selects_first_card_of_page() {
        let mut model = ProjectsModel::new(records(3), 2);
        model.select_next();
        assert!(model.next_page());
        assert_eq!(model.selected_project().map(|p| p.title.as_str()), Some("P2"));
        assert!(!model.next_page());
    }

    #[test]
    fn test_reset_after_paging() {
        let mut model = ProjectsModel::new(records(5), 2);
        model.go_to_page(3);
        model.reset();
        assert_eq!(model.pager.current(), 1);
        assert_eq!(model.selected_on_page, Some(0));
    }

    #[test]
    fn test_empty_project_list() {
        let model = ProjectsModel::new(Vec::new(), 2);
        assert!(model.visible().is_empty());
        assert!(model.selected_project().is_none());
    }
}
