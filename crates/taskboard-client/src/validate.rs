//! Form Validation Rules
//!
//! Small checks shared by the auth and task forms. Each rule records at most
//! one message per field into a [`FieldErrors`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::FieldErrors;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Accumulates field errors for one form
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field must contain something other than whitespace
    pub fn required(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.insert(field, message);
        }
        self
    }

    /// Non-empty value must look like an email address
    pub fn email(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if !value.trim().is_empty() && !is_email(value.trim()) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Non-empty value must have at least `min` characters
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize, message: &str) -> &mut Self {
        if !value.is_empty() && value.chars().count() < min {
            self.errors.insert(field, message);
        }
        self
    }

    /// Value must have at most `max` characters
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize, message: &str) -> &mut Self {
        if value.chars().count() > max {
            self.errors.insert(field, message);
        }
        self
    }

    /// Value must equal `other` (e.g. a password confirmation)
    pub fn matches(&mut self, field: &str, value: &str, other: &str, message: &str) -> &mut Self {
        if !value.is_empty() && value != other {
            self.errors.insert(field, message);
        }
        self
    }

    /// Record a message unconditionally
    pub fn fail(&mut self, field: &str, message: &str) -> &mut Self {
        self.errors.insert(field, message);
        self
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Parse the `YYYY-MM-DD` prefix of a date or datetime string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let prefix = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("user@example"));
        assert!(!is_email("user example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_required_ignores_whitespace() {
        let mut v = Validator::new();
        v.required("name", "   ", "Name is required");
        assert_eq!(v.finish().get("name"), Some("Name is required"));
    }

    #[test]
    fn test_rules_record_first_failure_only() {
        let mut v = Validator::new();
        v.required("email", "", "Email is required")
            .email("email", "", "Invalid email");
        let errors = v.finish();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_char_limits_count_chars_not_bytes() {
        let mut v = Validator::new();
        v.max_chars("title", &"é".repeat(255), 255, "too long");
        assert!(v.finish().is_empty());

        let mut v = Validator::new();
        v.max_chars("title", &"a".repeat(256), 255, "too long");
        assert!(v.finish().contains("title"));
    }

    #[test]
    fn test_parse_date_accepts_datetime_prefix() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_date("2024-03-09"), Some(expected));
        assert_eq!(parse_date("2024-03-09T00:00:00.000000Z"), Some(expected));
        assert_eq!(parse_date("2024-03-09 12:30:00"), Some(expected));
        assert_eq!(parse_date("09/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }
}
