//! Profile form validation rules.
//!
//! Pure and synchronous. The result is a map from field to message; a field
//! with no entry is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProfileDraft, ProfileField};

pub const MIN_FULL_NAME_CHARS: usize = 2;
pub const MIN_BIO_CHARS: usize = 50;
pub const MAX_BIO_CHARS: usize = 500;

pub const FULL_NAME_MESSAGE: &str = "Full name must be at least 2 characters.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const BIO_TOO_SHORT_MESSAGE: &str = "Bio should be at least 50 characters.";
pub const BIO_TOO_LONG_MESSAGE: &str = "Bio should not exceed 500 characters.";
pub const EXPERTISE_MESSAGE: &str = "Please select at least one area of expertise.";
pub const WRITING_SAMPLES_MESSAGE: &str = "Please upload at least one writing sample.";

// local@label(.label)+ where labels are alphanumeric with inner hyphens.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ProfileField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Returns true if `email` matches the accepted address grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks a single field, returning its message when invalid.
pub fn check_field(draft: &ProfileDraft, field: ProfileField) -> Option<&'static str> {
    match field {
        ProfileField::FullName => {
            (draft.full_name.chars().count() < MIN_FULL_NAME_CHARS).then_some(FULL_NAME_MESSAGE)
        }
        ProfileField::Email => (!is_valid_email(&draft.email)).then_some(EMAIL_MESSAGE),
        ProfileField::Bio => {
            let len = draft.bio.chars().count();
            if len < MIN_BIO_CHARS {
                Some(BIO_TOO_SHORT_MESSAGE)
            } else if len > MAX_BIO_CHARS {
                Some(BIO_TOO_LONG_MESSAGE)
            } else {
                None
            }
        }
        ProfileField::Expertise => draft.expertise.is_empty().then_some(EXPERTISE_MESSAGE),
        ProfileField::WritingSamples => draft
            .writing_samples
            .is_empty()
            .then_some(WRITING_SAMPLES_MESSAGE),
    }
}

/// Validates only the listed fields.
pub fn validate_fields(draft: &ProfileDraft, fields: &[ProfileField]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        if let Some(message) = check_field(draft, *field) {
            errors.insert(*field, message);
        }
    }
    errors
}

/// Validates every rule-bearing field of the draft.
pub fn validate_profile(draft: &ProfileDraft) -> FieldErrors {
    validate_fields(draft, &ProfileField::ALL)
}
