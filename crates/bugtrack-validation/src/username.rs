//! Username validation

use crate::ValidationResult;

pub const USERNAME_MIN_LENGTH: usize = 4;
pub const USERNAME_MAX_LENGTH: usize = 20;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_LENGTH: &str = "Username must be between 4 and 20 characters";

/// Validates a username field
///
/// - not blank → "Username is required"
/// - 4 to 20 characters after trimming → "Username must be between 4 and 20 characters"
// TODO: uniqueness needs the user-lookup service; check it there before submitting.
pub fn validate_username(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(USERNAME_REQUIRED);
    }

    let length = trimmed.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
        return ValidationResult::invalid(USERNAME_LENGTH);
    }

    ValidationResult::valid()
}
