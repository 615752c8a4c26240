//! Field validation for the party draft.
//!
//! Each rule looks at one field only. The draft is valid when the returned
//! [`ErrorMap`] is empty.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

use crate::models::{FieldClass, PartyDraft, PartyField};

/// Minimum trimmed length of a party name.
const MIN_NAME_LEN: usize = 2;

/// Types of field validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    /// Required field is empty
    Required,
    /// Name shorter than two characters
    TooShort,
    /// Phone is not exactly ten digits
    BadPhone,
    /// Email does not look like `local@domain.tld`
    BadEmail,
    /// Zipcode is not exactly six digits
    BadZip,
}

impl FieldErrorKind {
    /// Message shown next to the field.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Party name is required",
            Self::TooShort => "Party name must be at least 2 characters",
            Self::BadPhone => "Please enter a valid 10-digit phone number",
            Self::BadEmail => "Please enter a valid email address",
            Self::BadZip => "Please enter a valid 6-digit zipcode",
        }
    }
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "REQUIRED"),
            Self::TooShort => write!(f, "TOO_SHORT"),
            Self::BadPhone => write!(f, "BAD_PHONE"),
            Self::BadEmail => write!(f, "BAD_EMAIL"),
            Self::BadZip => write!(f, "BAD_ZIP"),
        }
    }
}

/// Validation error for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Failed rule
    pub kind: FieldErrorKind,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    /// Creates an error with the default message for `kind`.
    #[must_use]
    pub fn new(kind: FieldErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Per-field validation errors. A missing key means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<PartyField, FieldError>);

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: PartyField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// True when `field` has an error.
    #[must_use]
    pub fn contains(&self, field: PartyField) -> bool {
        self.0.contains_key(&field)
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: PartyField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Removes the error for `field`. Returns true if one was present.
    pub fn clear(&mut self, field: PartyField) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Iterate errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (PartyField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Single-line summary for a notice.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.len() {
            0 => String::new(),
            1 => "Please fix the highlighted field before saving".to_string(),
            n => format!("Please fix the {n} highlighted fields before saving"),
        }
    }
}

/// Field validator with precompiled patterns.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    phone: Regex,
    email: Regex,
    zipcode: Regex,
}

impl FieldValidator {
    /// Creates a validator.
    #[must_use]
    pub fn new() -> Self {
        // Patterns are literals; compilation cannot fail.
        Self {
            phone: Regex::new(r"^[0-9]{10}$").unwrap(),
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
            zipcode: Regex::new(r"^[0-9]{6}$").unwrap(),
        }
    }

    /// Validates a single field value.
    pub fn check(&self, field: PartyField, value: &str) -> Result<(), FieldErrorKind> {
        match field.class() {
            FieldClass::Name => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(FieldErrorKind::Required)
                } else if trimmed.chars().count() < MIN_NAME_LEN {
                    Err(FieldErrorKind::TooShort)
                } else {
                    Ok(())
                }
            }
            FieldClass::Phone => Self::optional(value, &self.phone, FieldErrorKind::BadPhone),
            FieldClass::Email => Self::optional(value, &self.email, FieldErrorKind::BadEmail),
            FieldClass::Zipcode => Self::optional(value, &self.zipcode, FieldErrorKind::BadZip),
            FieldClass::FreeText => Ok(()),
        }
    }

    fn optional(value: &str, pattern: &Regex, kind: FieldErrorKind) -> Result<(), FieldErrorKind> {
        if value.is_empty() || pattern.is_match(value) {
            Ok(())
        } else {
            Err(kind)
        }
    }

    /// Validates every field of the draft.
    #[must_use]
    pub fn validate(&self, draft: &PartyDraft) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in PartyField::ALL {
            if let Err(kind) = self.check(field, draft.get(field)) {
                errors.insert(field, FieldError::new(kind));
            }
        }
        errors
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `draft` with a fresh validator.
#[must_use]
pub fn validate(draft: &PartyDraft) -> ErrorMap {
    FieldValidator::new().validate(draft)
}
