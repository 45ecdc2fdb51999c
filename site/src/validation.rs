//! Contact form field rules.
//!
//! Each check is total: any string is either valid or not. Lengths are
//! counted in characters, not bytes.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::i18n::Translations;
use crate::models::ContactForm;

pub const NAME_LENGTH: (usize, usize) = (3, 100);
pub const SUBJECT_LENGTH: (usize, usize) = (5, 200);
pub const MESSAGE_LENGTH: (usize, usize) = (10, 5000);

// something@something.something with no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn value(self, form: &ContactForm) -> &str {
        match self {
            ContactField::Name => &form.name,
            ContactField::Email => &form.email,
            ContactField::Subject => &form.subject,
            ContactField::Message => &form.message,
        }
    }

    pub fn value_mut(self, form: &mut ContactForm) -> &mut String {
        match self {
            ContactField::Name => &mut form.name,
            ContactField::Email => &mut form.email,
            ContactField::Subject => &mut form.subject,
            ContactField::Message => &mut form.message,
        }
    }

    pub fn is_valid(self, value: &str) -> bool {
        match self {
            ContactField::Name => is_valid_name(value),
            ContactField::Email => is_valid_email(value),
            ContactField::Subject => is_valid_subject(value),
            ContactField::Message => is_valid_message(value),
        }
    }

    pub fn error_message(self, translations: &Translations) -> &'static str {
        let errors = &translations.contact.errors;
        match self {
            ContactField::Name => errors.name,
            ContactField::Email => errors.email,
            ContactField::Subject => errors.subject,
            ContactField::Message => errors.message,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → localized message, one entry per failing field.
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

fn length_within(value: &str, (min, max): (usize, usize)) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

pub fn is_valid_name(name: &str) -> bool {
    length_within(name, NAME_LENGTH)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_subject(subject: &str) -> bool {
    length_within(subject, SUBJECT_LENGTH)
}

pub fn is_valid_message(message: &str) -> bool {
    length_within(message, MESSAGE_LENGTH)
}

/// Runs every field check; an empty map means the form can be sent.
pub fn validate_contact_form(form: &ContactForm, translations: &Translations) -> FieldErrors {
    ContactField::ALL
        .into_iter()
        .filter(|field| !field.is_valid(field.value(form)))
        .map(|field| (field, field.error_message(translations)))
        .collect()
}
