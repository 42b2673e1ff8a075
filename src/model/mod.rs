//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: selected page, display mode, theme key
//! - **ProjectsModel**: project list and its paginator
//! - **FeedModel**: blog tiles and request tokens
//! - **ContactForm**: contact field values and submitted flag
//! - **UiModel**: toast, scroll, quit flag
//!
//! Key principles:
//! - Clone + Debug: can snapshot state
//! - No services: all I/O lives in the runtime (`main.rs`, `services`)
//! - Side effects are requested by returning a [`Command`]

pub mod contact;
pub mod feed;
pub mod navigation;
pub mod projects;
pub mod types;
pub mod ui;

pub use contact::ContactForm;
pub use feed::FeedModel;
pub use navigation::NavigationModel;
pub use projects::ProjectsModel;
pub use types::*;
pub use ui::UiModel;

use crate::content;
use crate::pages::Page;
use crate::DisplayMode;

/// Side effect the runtime must perform after a state transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run one feed aggregation cycle tagged with `token`
    FetchFeeds { token: u64 },
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub navigation: NavigationModel,
    pub projects: ProjectsModel,
    pub feed: FeedModel,
    pub contact: ContactForm,
    pub ui: UiModel,
}

impl Model {
    /// Create the initial model; call [`Model::mount_selected`] once to
    /// mount the starting page.
    pub fn new(start: Page, mode: DisplayMode) -> Self {
        let mut navigation = NavigationModel::new();
        navigation.select(start);
        navigation.mode = mode;

        Self {
            navigation,
            projects: ProjectsModel::new(content::projects(), content::PROJECTS_PER_PAGE),
            feed: FeedModel::new(),
            contact: ContactForm::new(),
            ui: UiModel::new(),
        }
    }

    pub fn selected_page(&self) -> Page {
        self.navigation.selected()
    }

    /// Reset the selected page's transient state as a fresh mount would
    pub fn mount_selected(&mut self) -> Option<Command> {
        self.ui.scroll_offset = 0;
        match self.navigation.selected() {
            Page::Projects => {
                self.projects.reset();
                None
            }
            Page::Contact => {
                self.contact = ContactForm::new();
                None
            }
            Page::Blogs => {
                self.feed.reset();
                Some(Command::FetchFeeds {
                    token: self.feed.begin_fetch(),
                })
            }
            Page::About | Page::Education | Page::Work | Page::Resume | Page::Research => None,
        }
    }

    /// Switch to `page`, mounting it if it is not already selected
    pub fn navigate(&mut self, page: Page) -> Option<Command> {
        if page == self.navigation.selected() {
            return None;
        }
        log::debug!("navigate: {} -> {}", self.navigation.selected().id(), page.id());
        self.navigation.select(page);
        self.mount_selected()
    }

    /// Switch by page identifier; unknown identifiers change nothing
    pub fn navigate_id(&mut self, id: &str) -> Option<Command> {
        match Page::from_id(id) {
            Some(page) => self.navigate(page),
            None => {
                log::debug!("navigate: ignoring unknown page '{}'", id);
                None
            }
        }
    }

    pub fn next_page(&mut self) -> Option<Command> {
        self.navigate(crate::logic::navigation::page_after(self.selected_page()))
    }

    pub fn prev_page(&mut self) -> Option<Command> {
        self.navigate(crate::logic::navigation::page_before(self.selected_page()))
    }

    /// Issue a new feed cycle without clearing shown items
    pub fn refresh_feed(&mut self) -> Command {
        Command::FetchFeeds {
            token: self.feed.begin_fetch(),
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Page::About, DisplayMode::Dark)
    }
}
