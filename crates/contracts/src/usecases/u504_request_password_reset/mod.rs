//! Customer "forgot password" request. Simulated: every valid email gets the
//! same acknowledgement, whether or not an account exists.

use crate::shared::notice::Notice;
use crate::shared::validation::{require_email, ValidationErrors};
use crate::usecases::common::UseCaseMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetRequest {
    email: String,
}

impl PasswordResetRequest {
    pub fn new(email: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.push(require_email("email", email));
        errors.into_result()?;
        Ok(Self {
            email: email.trim().to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Outcome of the simulated request; it never fails.
    pub fn acknowledge(&self) -> Notice {
        Notice::success(
            "Reset Request Sent",
            "If an account exists with this email, you will receive password reset instructions shortly.",
        )
    }
}

pub struct RequestPasswordReset;

impl UseCaseMetadata for RequestPasswordReset {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "request_password_reset"
    }

    fn display_name() -> &'static str {
        "Reset Password"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_rejected() {
        let errors = PasswordResetRequest::new("not-an-email").unwrap_err();
        assert_eq!(
            errors.for_field("email"),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_any_valid_email_is_acknowledged() {
        for email in ["john.doe@example.com", "nobody@nowhere.org"] {
            let request = PasswordResetRequest::new(email).unwrap();
            assert_eq!(request.acknowledge().title, "Reset Request Sent");
        }
    }
}
