//! Accepting a new inquiry: review the confirmation email, then send it.
//!
//! ```text
//! Idle --begin(new inquiry)--> PendingConfirmation --send--> Idle (inquiry accepted)
//!                                     |
//!                                     +--cancel--> Idle (nothing changed)
//! ```

mod email;
mod workflow;

pub use email::{confirmation_draft, confirmation_subject, ConfirmationDraft};
pub use workflow::{AcceptInquiry, AcceptanceError, AcceptanceState, SentConfirmation};

use crate::usecases::common::UseCaseMetadata;

impl UseCaseMetadata for AcceptInquiry {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "accept_inquiry"
    }

    fn display_name() -> &'static str {
        "Accept inquiry"
    }

    fn description() -> &'static str {
        "Send the confirmation email and mark a new inquiry as accepted"
    }
}
