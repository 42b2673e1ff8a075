//! Contact form input rules
//!
//! The form model accepts anything; these checks belong to the input layer
//! and gate the submit key.

use crate::model::contact::ContactForm;
use crate::model::types::ContactField;

/// Why the input layer refuses to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    Missing(ContactField),
    InvalidEmail,
}

impl SubmitBlocker {
    pub fn message(&self) -> String {
        match self {
            SubmitBlocker::Missing(field) => format!("Error: {} is required", field.label()),
            SubmitBlocker::InvalidEmail => "Error: Email address looks invalid".to_string(),
        }
    }
}

/// Basic `local@domain` shape check
///
/// # Examples
/// ```
/// use foliotui::logic::contact::looks_like_email;
///
/// assert!(looks_like_email("me@example.com"));
/// assert!(!looks_like_email("me@"));
/// assert!(!looks_like_email("me example.com"));
/// ```
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// First rule the form breaks, in field order
pub fn submit_blocker(form: &ContactForm) -> Option<SubmitBlocker> {
    for field in ContactField::ALL {
        if form.value(field).trim().is_empty() {
            return Some(SubmitBlocker::Missing(field));
        }
    }

    if !looks_like_email(form.value(ContactField::Email)) {
        return Some(SubmitBlocker::InvalidEmail);
    }

    None
}
