//! bugtrack validation
//!
//! Pure field validators used by the authentication forms (login,
//! registration, password reset).
//!
//! Every validator takes a `&str` and returns a [`ValidationResult`]. Nothing
//! here panics or returns `Err`: an empty or malformed value is just an
//! invalid result carrying a message for the form to display.
//!
//! ```
//! use bugtrack_validation::{validate_email, validate_password_strict};
//!
//! assert!(validate_email("user@example.com").is_valid());
//! assert_eq!(validate_email("").error_message(), "Email is required");
//! assert!(validate_password_strict("Password1!").is_valid());
//! ```

pub mod email;
pub mod password;
pub mod result;
pub mod username;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use result::ValidationResult;
pub use username::*;
