//! Feed Model
//!
//! Blog tiles for the Blogs page. Results arrive from the feed service tagged
//! with the token of the request that produced them; only the latest token
//! is accepted, so overlapping fetch cycles cannot overwrite each other.

use crate::logic;
use crate::model::types::{FeedItem, SourceOutcome};

#[derive(Clone, Debug, Default)]
pub struct FeedModel {
    /// `None` until a fetch cycle completes (render a loading indicator)
    items: Option<Vec<FeedItem>>,

    /// Per-source results of the last accepted cycle
    outcomes: Vec<SourceOutcome>,

    /// Selected tile
    pub selected_index: Option<usize>,

    /// Token of the most recently issued request
    latest_token: u64,

    /// Whether the latest request is still running
    in_flight: bool,
}

impl FeedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request token; older in-flight results become stale
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_token += 1;
        self.in_flight = true;
        self.latest_token
    }

    /// Accept a completed cycle if it belongs to the latest request
    ///
    /// Returns `false` (and changes nothing) for stale tokens.
    pub fn complete(&mut self, token: u64, outcomes: Vec<SourceOutcome>) -> bool {
        if token != self.latest_token {
            return false;
        }

        let items = logic::feed::flatten_outcomes(&outcomes);
        self.selected_index = logic::navigation::clamp_selection(self.selected_index, items.len());
        self.items = Some(items);
        self.outcomes = outcomes;
        self.in_flight = false;
        true
    }

    /// Forget shown results (the page is being mounted afresh)
    pub fn reset(&mut self) {
        self.items = None;
        self.outcomes.clear();
        self.selected_index = None;
        self.in_flight = false;
    }

    /// No cycle has completed yet
    pub fn is_loading(&self) -> bool {
        self.items.is_none()
    }

    /// A request is running (possibly while older items are still shown)
    pub fn is_refreshing(&self) -> bool {
        self.in_flight
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    pub fn items(&self) -> &[FeedItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn outcomes(&self) -> &[SourceOutcome] {
        &self.outcomes
    }

    /// (sources that answered, sources attempted) in the last cycle
    pub fn source_summary(&self) -> (usize, usize) {
        (logic::feed::count_ok(&self.outcomes), self.outcomes.len())
    }

    pub fn selected_item(&self) -> Option<&FeedItem> {
        self.selected_index.and_then(|idx| self.items().get(idx))
    }

    pub fn select_next(&mut self) {
        self.selected_index = logic::navigation::next_selection(self.selected_index, self.items().len());
    }

    pub fn select_prev(&mut self) {
        self.selected_index = logic::navigation::prev_selection(self.selected_index, self.items().len());
    }
}
