//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - contact: Input-layer rules for the contact form
//! - errors: Classification of relay/network failures
//! - feed: Relay item conversion and outcome flattening
//! - navigation: Page tab and card list selection
//! - pagination: Fixed-size paging for the project list
//! - ui: UI toggles and timers

pub mod contact;
pub mod errors;
pub mod feed;
pub mod navigation;
pub mod pagination;
pub mod ui;
