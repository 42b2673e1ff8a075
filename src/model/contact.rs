//! Contact Form Model
//!
//! Free-text fields plus a submitted flag. There is no delivery backend:
//! submitting only shows the confirmation message.

use super::types::ContactField;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitted: bool,

    /// Field receiving keystrokes while editing
    pub focused: Option<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Replace one field's value (last write wins, other fields untouched)
    pub fn update_field(&mut self, field: ContactField, value: String) {
        *self.value_mut(field) = value;
    }

    /// Replace a field addressed by input name; unknown names are ignored
    pub fn update_field_by_name(&mut self, name: &str, value: String) -> bool {
        match ContactField::from_name(name) {
            Some(field) => {
                self.update_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Mark the form as sent; calling it again changes nothing
    pub fn submit(&mut self) {
        self.submitted = true;
        self.focused = None;
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_editing(&self) -> bool {
        self.focused.is_some()
    }

    /// Start editing at the first field
    pub fn start_editing(&mut self) {
        if self.focused.is_none() {
            self.focused = Some(ContactField::Name);
        }
    }

    pub fn stop_editing(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.map(|field| match field {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        });
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.map(|field| match field {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        });
    }

    /// Append a typed character to the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused {
            self.value_mut(field).push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused {
            self.value_mut(field).pop();
        }
    }
}
