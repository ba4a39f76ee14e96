use contracts::system::auth::{AdminSession, AuthError, Credentials};
use leptos::prelude::*;

use super::storage::LocalStorage;
use crate::shared::config::simulated_delay;

fn session() -> AdminSession<LocalStorage> {
    AdminSession::new(LocalStorage)
}

/// Admin session handle shared through context.
///
/// `authenticated` mirrors the localStorage flag so the guard re-renders on
/// login and logout.
#[derive(Clone, Copy)]
pub struct AdminAuth {
    authenticated: RwSignal<bool>,
}

impl AdminAuth {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(session().is_authenticated()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Validates, waits out the simulated round trip, then checks the pair.
    pub async fn login(&self, username: String, password: String) -> Result<(), AuthError> {
        let credentials = Credentials::new(&username, &password)?;
        simulated_delay().await;

        let result = session().login(&credentials);
        self.authenticated.set(session().is_authenticated());
        match &result {
            Ok(()) => log::info!("admin login: {}", credentials.username()),
            Err(e) => log::warn!("admin login rejected for {}: {}", credentials.username(), e),
        }
        result
    }

    pub fn logout(&self) {
        session().logout();
        self.authenticated.set(false);
        log::info!("admin logout");
    }
}

impl Default for AdminAuth {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AdminAuth::new());
    children()
}

/// Hook to access the admin session
pub fn use_auth() -> AdminAuth {
    expect_context::<AdminAuth>()
}
