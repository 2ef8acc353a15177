//! Contact form validation.
//!
//! Client-side shape checks only: required fields, a plausible email and,
//! when given, a plausible phone number.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Fields that must be present and non-empty.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Field values of one submit, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/value pairs; a repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The first rule a submission broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("phone number is malformed")]
    InvalidPhone,
}

/// Validator for contact form submissions.
pub struct FormValidator;

// Regex patterns (cached for performance)
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

impl FormValidator {
    /// Whether a submission may be sent.
    pub fn validate(submission: &FormSubmission) -> bool {
        Self::validate_detailed(submission).is_ok()
    }

    /// Check a submission, reporting the first rule it breaks.
    ///
    /// Rules, in order:
    /// - name, email, subject and message are present and non-empty
    /// - email has one `@` and a dot after it, with no whitespace
    /// - a non-blank phone, whitespace removed, is an optional `+`, an
    ///   optional `(`, then 10+ digits, spaces, hyphens or parentheses
    pub fn validate_detailed(submission: &FormSubmission) -> Result<(), ValidationFailure> {
        for field in REQUIRED_FIELDS {
            if submission.get(field).map_or(true, str::is_empty) {
                return Err(ValidationFailure::MissingField(field));
            }
        }

        let email = submission.get("email").unwrap_or_default();
        if !Self::is_valid_email(email) {
            return Err(ValidationFailure::InvalidEmail);
        }

        if let Some(phone) = submission.get("phone").filter(|p| !p.trim().is_empty()) {
            if !Self::is_valid_phone(phone) {
                return Err(ValidationFailure::InvalidPhone);
            }
        }

        Ok(())
    }

    fn is_valid_email(email: &str) -> bool {
        let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?\(?[0-9\s\-()]{10,}$").unwrap());
        let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        regex.is_match(&compact)
    }
}
