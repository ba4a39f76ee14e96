use thiserror::Error;

use super::email::{confirmation_draft, ConfirmationDraft};
use crate::domain::a001_inquiry::{Inquiry, InquiryId, InquiryStatus};
use crate::shared::list::ListState;
use crate::shared::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptanceError {
    #[error("Only new inquiries can be accepted (inquiry {id} is {status}).")]
    NotNew { id: InquiryId, status: InquiryStatus },
    #[error("No confirmation email is being prepared.")]
    NothingPending,
    #[error("Inquiry {0} no longer exists.")]
    UnknownInquiry(InquiryId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AcceptanceState {
    #[default]
    Idle,
    PendingConfirmation(ConfirmationDraft),
}

/// Result of a sent confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentConfirmation {
    pub email: ConfirmationDraft,
}

impl SentConfirmation {
    pub fn notice(&self) -> Notice {
        Notice::success(
            "Email Sent",
            format!("Confirmation email sent to {}", self.email.customer_name),
        )
    }
}

/// Acceptance dialog state machine.
#[derive(Debug, Clone, Default)]
pub struct AcceptInquiry {
    state: AcceptanceState,
}

impl AcceptInquiry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AcceptanceState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, AcceptanceState::PendingConfirmation(_))
    }

    pub fn draft(&self) -> Option<&ConfirmationDraft> {
        match &self.state {
            AcceptanceState::PendingConfirmation(draft) => Some(draft),
            AcceptanceState::Idle => None,
        }
    }

    /// Opens the dialog for a `new` inquiry. A draft that was already pending
    /// is discarded. The store is not touched.
    pub fn begin(&mut self, inquiry: &Inquiry) -> Result<&ConfirmationDraft, AcceptanceError> {
        if !inquiry.is_new() {
            return Err(AcceptanceError::NotNew {
                id: inquiry.id,
                status: inquiry.status,
            });
        }
        self.state = AcceptanceState::PendingConfirmation(confirmation_draft(inquiry));
        self.draft().ok_or(AcceptanceError::NothingPending)
    }

    pub fn edit_body(&mut self, body: impl Into<String>) -> Result<(), AcceptanceError> {
        match &mut self.state {
            AcceptanceState::PendingConfirmation(draft) => {
                draft.body = body.into();
                Ok(())
            }
            AcceptanceState::Idle => Err(AcceptanceError::NothingPending),
        }
    }

    /// Marks the pending inquiry as accepted in `list` and returns to `Idle`.
    ///
    /// Only the status of that one record changes. On error the draft is
    /// dropped as well, except for `NothingPending` where there was none.
    pub fn send(&mut self, list: &mut ListState<Inquiry>) -> Result<SentConfirmation, AcceptanceError> {
        let draft = match std::mem::take(&mut self.state) {
            AcceptanceState::PendingConfirmation(draft) => draft,
            AcceptanceState::Idle => return Err(AcceptanceError::NothingPending),
        };

        let current = list
            .find(draft.inquiry_id)
            .ok_or(AcceptanceError::UnknownInquiry(draft.inquiry_id))?;
        if !current.is_new() {
            return Err(AcceptanceError::NotNew {
                id: current.id,
                status: current.status,
            });
        }

        list.replace_record(draft.inquiry_id, |inquiry| {
            inquiry.clone().with_status(InquiryStatus::Accepted)
        });

        Ok(SentConfirmation { email: draft })
    }

    /// Closes the dialog; nothing is changed.
    pub fn cancel(&mut self) {
        self.state = AcceptanceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::seed_inquiries;
    use crate::shared::list::StatusFilter;

    fn list() -> ListState<Inquiry> {
        ListState::new(seed_inquiries())
    }

    #[test]
    fn test_send_flips_only_that_inquiry() {
        let mut list = list();
        let before = list.store();
        let mut workflow = AcceptInquiry::new();

        let inquiry = list.find(InquiryId(5)).cloned().unwrap();
        workflow.begin(&inquiry).unwrap();
        assert!(workflow.is_pending());

        let sent = workflow.send(&mut list).unwrap();
        assert_eq!(sent.email.to, "david.c@example.com");
        assert_eq!(sent.notice().description, "Confirmation email sent to David Chen");
        assert_eq!(sent.notice().title, "Email Sent");
        assert_eq!(workflow.state(), &AcceptanceState::Idle);

        let after = list.store();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == InquiryId(5) {
                assert_eq!(new.status, InquiryStatus::Accepted);
                assert_eq!(new.clone().with_status(old.status), *old);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_begin_rejects_non_new() {
        let list = list();
        let mut workflow = AcceptInquiry::new();
        let accepted = list.find(InquiryId(3)).cloned().unwrap();
        assert_eq!(
            workflow.begin(&accepted),
            Err(AcceptanceError::NotNew {
                id: InquiryId(3),
                status: InquiryStatus::Accepted
            })
        );
        assert!(!workflow.is_pending());
    }

    #[test]
    fn test_begin_does_not_touch_store() {
        let list = list();
        let before = list.store();
        let mut workflow = AcceptInquiry::new();
        workflow.begin(&list.find(InquiryId(1)).cloned().unwrap()).unwrap();
        assert!(std::sync::Arc::ptr_eq(&before, &list.store()));
    }

    #[test]
    fn test_cancel_changes_nothing() {
        let mut list = list();
        let before = list.store();
        let mut workflow = AcceptInquiry::new();
        workflow.begin(&list.find(InquiryId(1)).cloned().unwrap()).unwrap();
        workflow.cancel();

        assert_eq!(workflow.send(&mut list), Err(AcceptanceError::NothingPending));
        assert_eq!(&*before, &*list.store());
    }

    #[test]
    fn test_edited_body_is_sent() {
        let mut list = list();
        let mut workflow = AcceptInquiry::new();
        assert_eq!(workflow.edit_body("x"), Err(AcceptanceError::NothingPending));

        workflow.begin(&list.find(InquiryId(8)).cloned().unwrap()).unwrap();
        workflow.edit_body("Hi Jennifer, see you Monday.").unwrap();
        let sent = workflow.send(&mut list).unwrap();
        assert_eq!(sent.email.body, "Hi Jennifer, see you Monday.");
    }

    #[test]
    fn test_send_keeps_criteria_and_page() {
        let mut list = list();
        list.set_status_filter(StatusFilter::Only(InquiryStatus::New));
        list.apply_filters();
        assert_eq!(list.filtered().len(), 3);

        let mut workflow = AcceptInquiry::new();
        workflow.begin(&list.find(InquiryId(1)).cloned().unwrap()).unwrap();
        workflow.send(&mut list).unwrap();

        assert_eq!(list.status_filter(), StatusFilter::Only(InquiryStatus::New));
        let names: Vec<_> = list.filtered().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["David Chen", "Jennifer Taylor"]);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_send_twice_for_same_inquiry_fails() {
        let mut list = list();
        let inquiry = list.find(InquiryId(1)).cloned().unwrap();
        let mut workflow = AcceptInquiry::new();
        workflow.begin(&inquiry).unwrap();
        let mut second = workflow.clone();

        workflow.send(&mut list).unwrap();
        assert!(matches!(
            second.send(&mut list),
            Err(AcceptanceError::NotNew { .. })
        ));
    }

    #[test]
    fn test_unknown_inquiry() {
        let mut list = ListState::new(Vec::new());
        let mut workflow = AcceptInquiry::new();
        workflow.begin(&seed_inquiries()[0]).unwrap();
        assert_eq!(
            workflow.send(&mut list),
            Err(AcceptanceError::UnknownInquiry(InquiryId(1)))
        );
        assert!(!workflow.is_pending());
    }
}
