//! Integration tests for the contact form and its submit rules

use foliotui::logic::contact::{submit_blocker, SubmitBlocker};
use foliotui::model::{ContactField, ContactForm, Model};
use foliotui::pages::Page;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(ContactField::Name, name.to_string());
    form.update_field(ContactField::Email, email.to_string());
    form.update_field(ContactField::Message, message.to_string());
    form
}

/// Test: fields are independent and keep the last write
#[test]
fn test_fields_are_independent() {
    let mut form = filled("Ada", "ada@example.com", "Hello");
    form.update_field_by_name("email", "ada@lovelace.dev".to_string());

    assert_eq!(form.value(ContactField::Name), "Ada");
    assert_eq!(form.value(ContactField::Email), "ada@lovelace.dev");
    assert_eq!(form.value(ContactField::Message), "Hello");
}

/// Test: unknown field names change nothing
#[test]
fn test_unknown_field_name_ignored() {
    let mut form = filled("Ada", "ada@example.com", "Hello");
    let before = form.clone();
    assert!(!form.update_field_by_name("subject", "Hi".to_string()));
    assert_eq!(form, before);
}

/// Test: submit sets the flag and stays set
#[test]
fn test_submit_is_idempotent() {
    let mut form = filled("Ada", "ada@example.com", "Hello");
    form.submit();
    form.submit();
    assert!(form.is_submitted());
    assert!(!form.is_editing());
}

/// Test: the input layer reports the first empty field, then the email shape
#[test]
fn test_submit_blockers_in_field_order() {
    assert_eq!(
        submit_blocker(&filled("", "", "")),
        Some(SubmitBlocker::Missing(ContactField::Name))
    );
    assert_eq!(
        submit_blocker(&filled("Ada", "  ", "Hello")),
        Some(SubmitBlocker::Missing(ContactField::Email))
    );
    assert_eq!(
        submit_blocker(&filled("Ada", "ada@example.com", "")),
        Some(SubmitBlocker::Missing(ContactField::Message))
    );
    assert_eq!(
        submit_blocker(&filled("Ada", "ada.example.com", "Hello")),
        Some(SubmitBlocker::InvalidEmail)
    );
    assert_eq!(submit_blocker(&filled("Ada", "ada@example.com", "Hello")), None);
}

/// Test: blocker messages are error toasts
#[test]
fn test_blocker_messages_are_errors() {
    assert_eq!(
        SubmitBlocker::Missing(ContactField::Email).message(),
        "Error: Email is required"
    );
    assert!(SubmitBlocker::InvalidEmail.message().starts_with("Error:"));
}

/// Test: re-entering Contact shows an empty, unsubmitted form
#[test]
fn test_contact_remount_clears_form() {
    let mut model = Model::new(Page::Contact, foliotui::DisplayMode::Dark);
    model.mount_selected();
    model.contact.start_editing();
    for c in "Grace".chars() {
        model.contact.push_char(c);
    }
    model.contact.submit();

    model.navigate(Page::About);
    model.navigate(Page::Contact);
    assert!(!model.contact.is_submitted());
    assert!(!model.contact.is_editing());
    assert_eq!(model.contact.value(ContactField::Name), "");
}
