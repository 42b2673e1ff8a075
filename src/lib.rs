//! Terminal Portfolio Library
//!
//! Exposes the model, logic and services for testing

pub mod api;
pub mod config;
pub mod content;
pub mod logging;
pub mod logic;
pub mod model;
pub mod pages;
pub mod services;
pub mod utils;

/// Display mode (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Dark => "dark",
            DisplayMode::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, DisplayMode::Dark)
    }
}
