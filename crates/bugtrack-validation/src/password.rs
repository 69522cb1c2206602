//! Password validation functions

use crate::ValidationResult;

/// Symbols accepted by the special-character rule
pub const PASSWORD_SYMBOLS: &[char] = &[
    '@', '$', '!', '%', '*', '?', '&', '#', '-', '_', '+', '=', '.', ',',
];

pub const DEFAULT_MIN_LENGTH: usize = 8;

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_NEEDS_LETTER: &str = "Password must contain at least one letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one digit";
pub const PASSWORD_NEEDS_SYMBOL: &str =
    "Password must contain at least one special character (@$!%*?&#-_+=.,)";

/// Individual password rules, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Required,
    MinLength,
    /// At least one ASCII letter
    Letter,
    Digit,
    Symbol,
}

/// Rule set applied to a password.
///
/// The two presets cover the forms: [`PasswordPolicy::login`] only checks
/// length, [`PasswordPolicy::registration`] adds the character-class rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl PasswordPolicy {
    /// 8+ characters
    pub const fn login() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_letter: false,
            require_digit: false,
            require_symbol: false,
        }
    }

    /// 8+ characters with a letter, a digit and a symbol
    pub const fn registration() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_letter: true,
            require_digit: true,
            require_symbol: true,
        }
    }

    /// Looks up a preset by name ("login" or "registration")
    ///
    /// ```
    /// use bugtrack_validation::PasswordPolicy;
    /// assert_eq!(PasswordPolicy::parse("login"), Some(PasswordPolicy::login()));
    /// assert_eq!(PasswordPolicy::parse("registration"), Some(PasswordPolicy::registration()));
    /// assert_eq!(PasswordPolicy::parse("medium"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "login" => Some(Self::login()),
            "registration" => Some(Self::registration()),
            _ => None,
        }
    }

    pub fn length_message(&self) -> String {
        format!(
            "Password must be at least {} characters long",
            self.min_length
        )
    }

    /// Message listing every requirement of this policy
    pub fn requirements_message(&self) -> String {
        let mut classes = Vec::new();
        if self.require_letter {
            classes.push("one letter");
        }
        if self.require_digit {
            classes.push("one digit");
        }
        if self.require_symbol {
            classes.push("one special character (@$!%*?&#-_+=.,)");
        }

        let length = self.length_message();
        match classes.as_slice() {
            [] => length,
            [only] => format!("{} and contain at least {}", length, only),
            [first, second] => format!(
                "{} and contain at least {} and {}",
                length, first, second
            ),
            [init @ .., last] => format!(
                "{} and contain at least {}, and {}",
                length,
                init.join(", "),
                last
            ),
        }
    }

    /// Runs the rules in order and reports the first one that fails
    pub fn evaluate(&self, password: &str) -> ValidationResult {
        match self.first_violation(password) {
            Some(rule) => ValidationResult::invalid(self.message_for(rule)),
            None => ValidationResult::valid(),
        }
    }

    /// First rule the password breaks, in checking order
    pub fn first_violation(&self, password: &str) -> Option<PasswordRule> {
        if password.trim().is_empty() {
            return Some(PasswordRule::Required);
        }
        if password.chars().count() < self.min_length {
            return Some(PasswordRule::MinLength);
        }
        if self.require_letter && !password.chars().any(|c| c.is_ascii_alphabetic()) {
            return Some(PasswordRule::Letter);
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Some(PasswordRule::Digit);
        }
        if self.require_symbol && !password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)) {
            return Some(PasswordRule::Symbol);
        }
        None
    }

    pub fn message_for(&self, rule: PasswordRule) -> String {
        match rule {
            PasswordRule::Required => PASSWORD_REQUIRED.to_string(),
            PasswordRule::MinLength => self.length_message(),
            PasswordRule::Letter => PASSWORD_NEEDS_LETTER.to_string(),
            PasswordRule::Digit => PASSWORD_NEEDS_DIGIT.to_string(),
            PasswordRule::Symbol => PASSWORD_NEEDS_SYMBOL.to_string(),
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::login()
    }
}

/// Login form check: required and 8+ characters
pub fn validate_password(value: &str) -> ValidationResult {
    PasswordPolicy::login().evaluate(value)
}

/// Registration form check.
///
/// A blank value reports "Password is required". Any other failure reports
/// a single message listing all requirements.
pub fn validate_password_strict(value: &str) -> ValidationResult {
    let policy = PasswordPolicy::registration();
    match policy.first_violation(value) {
        None => ValidationResult::valid(),
        Some(PasswordRule::Required) => ValidationResult::invalid(PASSWORD_REQUIRED),
        Some(_) => ValidationResult::invalid(policy.requirements_message()),
    }
}
