//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! the portfolio's domain records.

use chrono::NaiveDateTime;

use crate::logic::errors::ErrorType;

/// A static project card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub tags: Vec<String>,
}

impl ProjectRecord {
    pub fn new(title: &str, description: &str, link: Option<&str>, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            link: link.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A blog post tile produced from a relay response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub link: String,
    /// Plain-text summary (tags stripped, truncated)
    pub description: String,
    pub published: Option<NaiveDateTime>,
}

/// What a single feed source contributed to an aggregation cycle
#[derive(Clone, Debug, PartialEq)]
pub enum SourceOutcome {
    /// Source answered; holds at most the leading items kept from it
    Fetched { source: String, items: Vec<FeedItem> },
    /// Source contributed nothing (network error, bad status, bad body)
    Failed {
        source: String,
        error_type: ErrorType,
        message: String,
    },
}

impl SourceOutcome {
    pub fn source(&self) -> &str {
        match self {
            SourceOutcome::Fetched { source, .. } | SourceOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SourceOutcome::Fetched { .. })
    }
}

/// Contact form fields, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Parse an input name (`name`, `email`, `message`)
    pub fn from_name(name: &str) -> Option<ContactField> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }
}
