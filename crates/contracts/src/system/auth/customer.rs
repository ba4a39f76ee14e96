use super::credentials::Credentials;
use super::AuthError;

/// Customer portal login. Input is validated, then the attempt always fails
/// because the portal does not exist yet.
pub fn customer_login(username: &str, password: &str) -> Result<(), AuthError> {
    Credentials::for_customer(username, password)?;
    Err(AuthError::CustomerPortalUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_login_always_fails() {
        assert_eq!(
            customer_login("JohnDoe123", "secret"),
            Err(AuthError::CustomerPortalUnavailable)
        );
        assert_eq!(
            customer_login("admin", "admin"),
            Err(AuthError::CustomerPortalUnavailable)
        );
    }

    #[test]
    fn test_customer_login_validates_first() {
        match customer_login("J", "") {
            Err(AuthError::Validation(errors)) => assert_eq!(errors.errors.len(), 2),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
