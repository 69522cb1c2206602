// File: src/forms.rs
// Purpose: Authentication form models. Each form runs the field validators
// and names the page to go to once every field passes.

use bugtrack_validation::{
    validate_email, validate_password, validate_password_strict, validate_username,
    ValidationResult,
};
use serde::{Deserialize, Serialize};

use crate::pages::Page;

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Per-field results in field order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    fields: Vec<(&'static str, ValidationResult)>,
}

impl FormReport {
    fn new(fields: Vec<(&'static str, ValidationResult)>) -> Self {
        Self { fields }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, result)| result.is_valid())
    }

    pub fn fields(&self) -> &[(&'static str, ValidationResult)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, result)| result)
    }

    /// `(field, message)` for every failing field
    pub fn errors(&self) -> Vec<(&'static str, &str)> {
        self.fields
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(field, result)| (*field, result.error_message()))
            .collect()
    }

    fn into_outcome(self, next: Page) -> Result<Page, FormReport> {
        if self.is_valid() {
            Ok(next)
        } else {
            Err(self)
        }
    }
}

/// Sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormReport {
        FormReport::new(vec![
            ("email", validate_email(&self.email)),
            ("password", validate_password(&self.password)),
        ])
    }

    /// Home on success, otherwise the failing report
    pub fn submit(&self) -> Result<Page, FormReport> {
        self.validate().into_outcome(Page::Home)
    }
}

/// Account creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FormReport {
        let confirm = if self.confirm_password == self.password {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(PASSWORDS_DO_NOT_MATCH)
        };

        FormReport::new(vec![
            ("username", validate_username(&self.username)),
            ("email", validate_email(&self.email)),
            ("password", validate_password_strict(&self.password)),
            ("confirmPassword", confirm),
        ])
    }

    /// Login on success so the new user can sign in
    pub fn submit(&self) -> Result<Page, FormReport> {
        self.validate().into_outcome(Page::Login)
    }
}

/// Password reset request form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> FormReport {
        FormReport::new(vec![("email", validate_email(&self.email))])
    }

    pub fn submit(&self) -> Result<Page, FormReport> {
        self.validate().into_outcome(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_success() {
        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert_eq!(form.submit(), Ok(Page::Home));
    }

    #[test]
    fn test_login_reports_every_field() {
        let report = LoginForm::default().submit().unwrap_err();
        assert_eq!(
            report.errors(),
            vec![
                ("email", "Email is required"),
                ("password", "Password is required"),
            ]
        );
    }

    #[test]
    fn test_register_from_json() {
        let form: RegisterForm = serde_json::from_str(
            r#"{"username":"validuser","email":"user@example.com",
                "password":"Password1!","confirmPassword":"Password1!"}"#,
        )
        .unwrap();
        assert_eq!(form.submit(), Ok(Page::Login));
    }

    #[test]
    fn test_register_failures() {
        let form = RegisterForm {
            username: "ab".to_string(),
            email: "user@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
        };
        let report = form.validate();
        assert!(!report.is_valid());
        assert!(report.field("email").unwrap().is_valid());
        assert_eq!(
            report.field("username").unwrap().error_message(),
            "Username must be between 4 and 20 characters"
        );
        assert!(report
            .field("password")
            .unwrap()
            .error_message()
            .starts_with("Password must be at least 8 characters long"));
        assert_eq!(
            report.field("confirmPassword").unwrap().error_message(),
            PASSWORDS_DO_NOT_MATCH
        );
    }

    #[test]
    fn test_forgot_password() {
        let ok = ForgotPasswordForm {
            email: "user@example.com".to_string(),
        };
        assert_eq!(ok.submit(), Ok(Page::Login));

        let bad = ForgotPasswordForm {
            email: "user@".to_string(),
        };
        let report = bad.submit().unwrap_err();
        assert_eq!(report.errors(), vec![("email", "Invalid email format")]);
    }

    #[test]
    fn test_report_serializes_results() {
        let report = ForgotPasswordForm::default().validate();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fields": [["email", { "isValid": false, "errorMessage": "Email is required" }]]
            })
        );
    }
}
