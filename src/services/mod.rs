//! Background Services
//!
//! - feed: feed aggregation worker (relay fetches off the UI loop)

pub mod feed;

pub use feed::{aggregate_feeds, spawn_feed_service, FeedRequest, FeedResponse};
