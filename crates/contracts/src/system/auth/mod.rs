//! Demo authentication for the admin area and the customer portal.
//!
//! There is no server: the admin "session" is a single flag in browser
//! storage, and the customer portal is not implemented yet.

mod credentials;
mod customer;
mod session;
mod storage;

use thiserror::Error;

use crate::shared::validation::ValidationErrors;

pub use credentials::Credentials;
pub use customer::customer_login;
pub use session::{AdminSession, ADMIN_FLAG_KEY, ADMIN_FLAG_VALUE};
pub use storage::{MemoryStorage, SessionStorage};

/// Fixed latency of the simulated login and reset requests.
pub const SIMULATED_DELAY_MS: u32 = 1500;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid credentials. For demo, use username 'admin' and password 'admin'.")]
    InvalidCredentials,
    #[error("This is a demo. Customer login functionality will be implemented in the future.")]
    CustomerPortalUnavailable,
}
