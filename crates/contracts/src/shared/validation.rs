//! Field validation shared by the public and admin forms.
//!
//! Every check returns a [`ValidationError`] naming the form field, so the UI
//! can show the message next to the input or as a notification.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Все ошибки формы сразу, в порядке полей
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{}", .errors.first().map(|e| e.message.as_str()).unwrap_or("Invalid form"))]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn push(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.errors.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a specific field, if that field failed.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Requires at least `min` characters after trimming.
pub fn require_min_len(
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Loose syntactic email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.ends_with('.'),
        None => false,
    }
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !is_valid_email(value) {
        return Err(ValidationError::new(
            field,
            "Please enter a valid email address.",
        ));
    }
    Ok(())
}

/// Phone numbers are free-form; only the digit count is checked.
pub fn require_phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < 7 {
        return Err(ValidationError::new(
            field,
            "Please enter a valid phone number.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("  sarah.j@example.com "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john.doe"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john doe@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_min_len_trims() {
        assert!(require_min_len("username", "  a ", 2, "too short").is_err());
        assert!(require_min_len("username", "ab", 2, "too short").is_ok());
    }

    #[test]
    fn test_phone_counts_digits() {
        assert!(require_phone("phone", "555-123-4567").is_ok());
        assert!(require_phone("phone", "(555) 12").is_err());
    }

    #[test]
    fn test_errors_collect_in_order() {
        let mut errors = ValidationErrors::default();
        errors.push(require_min_len("name", "", 2, "Name is required."));
        errors.push(require_email("email", "nope"));
        errors.push(require_phone("phone", "5551234567"));

        assert_eq!(errors.errors.len(), 2);
        assert_eq!(errors.for_field("email"), Some("Please enter a valid email address."));
        assert_eq!(errors.for_field("phone"), None);
        assert_eq!(errors.to_string(), "Name is required.");
        assert!(errors.into_result().is_err());
    }
}
