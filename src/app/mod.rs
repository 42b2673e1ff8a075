//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each one bridges the pure model
//! (src/model/) and the outside world (processes, the feed service).

pub(crate) mod feed;
pub(crate) mod links;
