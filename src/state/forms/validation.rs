//! Synchronous field validation
//!
//! Every rule runs on every pass; errors are collected rather than
//! short-circuited, and the resulting [`ErrorState`] replaces the previous one
//! wholesale.

use super::field::FieldId;
use super::form_state::{Form, RegistrationForm, SignInForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum password length for new accounts
pub const MIN_PASSWORD_LEN: usize = 8;

/// Required digit count once a phone number is stripped of formatting
pub const PHONE_DIGITS: usize = 10;

/// Coarse "something@something.something" shape, not RFC 5322
static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Per-field validation messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: BTreeMap<FieldId, String>,
}

impl ErrorState {
    /// Start a pass with every listed field clean
    fn for_fields(ids: impl IntoIterator<Item = FieldId>) -> Self {
        Self {
            messages: ids.into_iter().map(|id| (id, String::new())).collect(),
        }
    }

    fn set(&mut self, id: FieldId, message: &str) {
        self.messages.insert(id, message.to_string());
    }

    /// Message for a field, empty when the field is valid or unknown
    pub fn message(&self, id: FieldId) -> &str {
        self.messages.get(&id).map_or("", String::as_str)
    }

    pub fn is_clean(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Fields that currently carry a message
    pub fn failing(&self) -> Vec<FieldId> {
        self.messages
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: ErrorState,
    pub is_valid: bool,
}

impl From<ErrorState> for Validation {
    fn from(errors: ErrorState) -> Self {
        let is_valid = errors.is_clean();
        Self { errors, is_valid }
    }
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Keep only ASCII digits: "555-123-4567" becomes "5551234567"
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn check_email(errors: &mut ErrorState, email: &str) {
    if email.is_empty() {
        errors.set(FieldId::Email, "Email is required");
    } else if !is_email_shaped(email) {
        errors.set(FieldId::Email, "Email is invalid");
    }
}

/// Validate the sign-in form
pub fn validate_sign_in(form: &SignInForm) -> Validation {
    let mut errors = ErrorState::for_fields([FieldId::Email, FieldId::Password]);

    check_email(&mut errors, form.text(FieldId::Email));

    if form.text(FieldId::Password).is_empty() {
        errors.set(FieldId::Password, "Password is required");
    }

    errors.into()
}

/// Validate the registration form, consent included
pub fn validate_registration(form: &RegistrationForm) -> Validation {
    let mut errors = ErrorState::for_fields(form.fields().iter().map(|f| f.id));

    if form.text(FieldId::FirstName).trim().is_empty() {
        errors.set(FieldId::FirstName, "First name is required");
    }

    if form.text(FieldId::LastName).trim().is_empty() {
        errors.set(FieldId::LastName, "Last name is required");
    }

    check_email(&mut errors, form.text(FieldId::Email));

    let phone = form.text(FieldId::Phone);
    if phone.is_empty() {
        errors.set(FieldId::Phone, "Phone number is required");
    } else if phone_digits(phone).len() != PHONE_DIGITS {
        errors.set(FieldId::Phone, "Phone number must be 10 digits");
    }

    let password = form.text(FieldId::Password);
    if password.is_empty() {
        errors.set(FieldId::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.set(FieldId::Password, "Password must be at least 8 characters");
    }

    let confirm = form.text(FieldId::ConfirmPassword);
    if confirm.is_empty() {
        errors.set(FieldId::ConfirmPassword, "Please confirm your password");
    } else if confirm != password {
        errors.set(FieldId::ConfirmPassword, "Passwords do not match");
    }

    if !form.terms.as_flag() {
        errors.set(FieldId::Terms, "You must agree to the terms and conditions");
    }

    errors.into()
}
