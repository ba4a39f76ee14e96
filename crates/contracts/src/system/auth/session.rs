use super::credentials::Credentials;
use super::storage::SessionStorage;
use super::AuthError;

pub const ADMIN_FLAG_KEY: &str = "adminAuthenticated";
pub const ADMIN_FLAG_VALUE: &str = "true";

/// Admin session backed by a single storage flag.
///
/// Authenticated exactly when the flag holds `"true"`; any other value, or no
/// value at all, means logged out.
#[derive(Debug)]
pub struct AdminSession<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> AdminSession<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get(ADMIN_FLAG_KEY).as_deref() == Some(ADMIN_FLAG_VALUE)
    }

    /// Sets the flag for the demo pair only; a failed attempt leaves it as it was.
    pub fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !credentials.is_demo_admin() {
            return Err(AuthError::InvalidCredentials);
        }
        self.storage.set(ADMIN_FLAG_KEY, ADMIN_FLAG_VALUE);
        Ok(())
    }

    pub fn logout(&self) {
        self.storage.remove(ADMIN_FLAG_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MemoryStorage;

    fn session() -> AdminSession<MemoryStorage> {
        AdminSession::new(MemoryStorage::new())
    }

    #[test]
    fn test_demo_credentials_set_flag() {
        let session = session();
        assert!(!session.is_authenticated());

        let credentials = Credentials::new("admin", "admin").unwrap();
        assert_eq!(session.login(&credentials), Ok(()));
        assert!(session.is_authenticated());
        assert_eq!(
            session.storage().get(ADMIN_FLAG_KEY).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_wrong_credentials_leave_flag_unset() {
        let session = session();
        for (user, pass) in [("admin", "Admin"), ("root", "admin"), ("Admin", "admin")] {
            let credentials = Credentials::new(user, pass).unwrap();
            assert_eq!(
                session.login(&credentials),
                Err(AuthError::InvalidCredentials)
            );
            assert!(session.storage().get(ADMIN_FLAG_KEY).is_none());
        }
    }

    #[test]
    fn test_padded_username_is_rejected() {
        let session = session();
        for user in [" admin", "admin ", "  admin "] {
            let credentials = Credentials::new(user, "admin").unwrap();
            assert_eq!(
                session.login(&credentials),
                Err(AuthError::InvalidCredentials),
                "{user:?}"
            );
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let session = session();
        session.login(&Credentials::new("admin", "admin").unwrap()).unwrap();
        let _ = session.login(&Credentials::new("admin", "nope").unwrap());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_only_exact_flag_value_counts() {
        let session = session();
        for value in ["TRUE", "1", "yes", ""] {
            session.storage().set(ADMIN_FLAG_KEY, value);
            assert!(!session.is_authenticated(), "{value:?}");
        }
    }

    #[test]
    fn test_logout_clears_flag() {
        let session = session();
        session.login(&Credentials::new("admin", "admin").unwrap()).unwrap();
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.storage().get(ADMIN_FLAG_KEY).is_none());
        // logging out twice is harmless
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_over_borrowed_storage() {
        let storage = MemoryStorage::new();
        AdminSession::new(&storage)
            .login(&Credentials::new("admin", "admin").unwrap())
            .unwrap();
        assert!(AdminSession::new(&storage).is_authenticated());
    }
}
