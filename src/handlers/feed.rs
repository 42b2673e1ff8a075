//! Feed Response Handler
//!
//! Applies completed aggregation cycles to the model.

use foliotui::services::FeedResponse;

use crate::App;

/// Apply a feed response; stale tokens are dropped by the model
pub fn handle_feed_response(app: &mut App, response: FeedResponse) {
    let token = response.token;
    if app.model.feed.complete(token, response.outcomes) {
        let (ok, total) = app.model.feed.source_summary();
        log::debug!(
            "feed: applied cycle {} ({} items, {}/{} sources ok)",
            token,
            app.model.feed.items().len(),
            ok,
            total
        );
    } else {
        log::debug!(
            "feed: discarded stale cycle {} (latest is {})",
            token,
            app.model.feed.latest_token()
        );
    }
}
