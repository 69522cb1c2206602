//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationResult;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID_FORMAT: &str = "Invalid email format";

// local-part@domain.tld
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Checks the `local@domain.tld` shape only
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates an email field
///
/// Checks, in order:
/// - not blank → "Email is required"
/// - matches `local@domain.tld` → "Invalid email format"
///
/// The value is not trimmed before the format check, so surrounding
/// whitespace is reported as a format error.
pub fn validate_email(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::invalid(EMAIL_REQUIRED);
    }

    if !is_valid_email(value) {
        return ValidationResult::invalid(EMAIL_INVALID_FORMAT);
    }

    ValidationResult::valid()
}
