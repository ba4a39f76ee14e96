//! Compile-time settings of the web client.

pub use contracts::shared::list::PAGE_SIZE;
pub use contracts::system::auth::{ADMIN_FLAG_KEY, SIMULATED_DELAY_MS};

/// Delay between the last keystroke in a search box and the filter run.
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Toasts close themselves after this long.
pub const TOAST_TIMEOUT_MS: u32 = 4000;

/// Stand-in for a network round trip.
pub async fn simulated_delay() {
    gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;
}
