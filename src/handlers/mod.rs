//! Event Handlers
//!
//! - keyboard: user keyboard input
//! - feed: aggregation results from the feed service
//!
//! Handlers take `&mut App`, update the model and run whatever command the
//! model hands back.

pub mod feed;
pub mod keyboard;

// Re-export for convenience
pub use feed::handle_feed_response;
pub use keyboard::handle_key;
