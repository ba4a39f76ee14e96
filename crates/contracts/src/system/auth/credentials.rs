use crate::shared::validation::{require_min_len, ValidationErrors};

use super::{DEMO_PASSWORD, DEMO_USERNAME};

/// Validated login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Admin form wording; see [`Credentials::for_customer`] for the portal.
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationErrors> {
        Self::validate(username, password, "Please enter your admin username.")
    }

    pub fn for_customer(username: &str, password: &str) -> Result<Self, ValidationErrors> {
        Self::validate(username, password, "Please enter your username.")
    }

    fn validate(
        username: &str,
        password: &str,
        username_message: &str,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.push(require_min_len("username", username, 2, username_message));
        errors.push(require_min_len(
            "password",
            password,
            1,
            "Please enter your password.",
        ));
        errors.into_result()?;

        // length check trims; the stored username stays as typed
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn is_demo_admin(&self) -> bool {
        self.username == DEMO_USERNAME && self.password == DEMO_PASSWORD
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_too_short() {
        let err = Credentials::new("a", "secret").unwrap_err();
        assert_eq!(
            err.for_field("username"),
            Some("Please enter your admin username.")
        );
        assert!(err.for_field("password").is_none());
    }

    #[test]
    fn test_empty_password() {
        let err = Credentials::for_customer("JohnDoe123", "").unwrap_err();
        assert_eq!(err.for_field("password"), Some("Please enter your password."));
    }

    #[test]
    fn test_username_kept_as_typed() {
        let credentials = Credentials::new(" admin", "admin").unwrap();
        assert_eq!(credentials.username(), " admin");
        assert!(!credentials.is_demo_admin());
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("admin", "hunter2").unwrap();
        let printed = format!("{credentials:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("admin"));
    }
}
