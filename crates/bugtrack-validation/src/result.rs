//! Validation result record shared by every validator

use serde::{Deserialize, Serialize};

/// Outcome of validating a single field.
///
/// `error_message` is empty exactly when `is_valid` is true. The fields are
/// private so the only way to build one is [`ValidationResult::valid`] or
/// [`ValidationResult::invalid`].
///
/// Serializes as `{"isValid": .., "errorMessage": ..}`. Deserializing
/// rejects records where the flag and the message disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawValidationResult")]
pub struct ValidationResult {
    is_valid: bool,
    error_message: String,
}

/// Wire shape checked before it becomes a [`ValidationResult`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValidationResult {
    is_valid: bool,
    #[serde(default)]
    error_message: String,
}

impl TryFrom<RawValidationResult> for ValidationResult {
    type Error = String;

    fn try_from(raw: RawValidationResult) -> Result<Self, Self::Error> {
        match (raw.is_valid, raw.error_message.is_empty()) {
            (true, true) => Ok(Self::valid()),
            (false, false) => Ok(Self::invalid(raw.error_message)),
            (true, false) => Err(format!(
                "valid result carries an error message: {:?}",
                raw.error_message
            )),
            (false, true) => Err("invalid result has an empty error message".to_string()),
        }
    }
}

impl ValidationResult {
    /// A passing result with an empty message
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    /// A failing result.
    ///
    /// An empty message would break the invariant, so it is replaced with
    /// a generic one.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let error_message = if message.is_empty() {
            "Invalid value".to_string()
        } else {
            message
        };

        Self {
            is_valid: false,
            error_message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Converts into the `Result<(), String>` shape used by server-side checks
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.error_message)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}
