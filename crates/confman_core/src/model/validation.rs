//! Required-field validation shared by all records.
//!
//! # Invariants
//! - A required string is valid only when it is non-empty after trimming.
//! - Errors list every offending field by its JSON key, in declaration order.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure raised before a record is constructed or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are blank or absent (JSON key names).
    MissingFields(Vec<String>),
    /// Year is outside the supported `1000..=9999` range.
    YearOutOfRange(i64),
    /// Year text is not a decimal integer.
    InvalidYear(String),
    /// Payment type text does not name a known variant.
    InvalidPaymentType(String),
}

impl ValidationError {
    /// Returns the missing field keys, or an empty slice for other variants.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                write!(f, "missing required field(s): {}", fields.join(", "))
            }
            Self::YearOutOfRange(value) => {
                write!(f, "year {value} is out of range; expected 1000..=9999")
            }
            Self::InvalidYear(text) => write!(f, "invalid year `{text}`"),
            Self::InvalidPaymentType(text) => write!(
                f,
                "invalid payment type `{text}`; expected CREDIT_CARD|CHECK|CASH|INVOICE"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Collects blank required fields before failing once with all of them.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<String>,
}

impl RequiredFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn text(mut self, key: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(key.to_string());
        }
        self
    }

    pub(crate) fn present<T>(mut self, key: &str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(key.to_string());
        }
        self
    }

    /// Merges a nested record's result, prefixing its keys with `prefix.`.
    pub(crate) fn nested(mut self, prefix: &str, result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => {}
            Err(ValidationError::MissingFields(fields)) => self
                .missing
                .extend(fields.into_iter().map(|key| format!("{prefix}.{key}"))),
            Err(_) => self.missing.push(prefix.to_string()),
        }
        self
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    /// Error listing the fields collected so far.
    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError::MissingFields(self.missing)
    }
}

/// Trims user input before it is stored in a record.
pub(crate) fn normalize(value: impl Into<String>) -> String {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}
