//! "Create customer account" from a reviewed inquiry.
//!
//! Placeholder action: it confirms and acknowledges, but no customer record
//! is created and no credentials are sent.

use thiserror::Error;

use crate::domain::a001_inquiry::{Inquiry, InquiryId};
use crate::shared::notice::Notice;
use crate::usecases::common::UseCaseMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountCreationError {
    #[error("Inquiry {0} has not been reviewed yet.")]
    InquiryNotReviewed(InquiryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreationNotice {
    pub inquiry_id: InquiryId,
    pub customer_name: String,
}

impl AccountCreationNotice {
    pub fn notice(&self) -> Notice {
        Notice::success(
            "Account Created",
            format!("Customer account created for {}", self.customer_name),
        )
    }
}

pub struct CreateCustomerAccount;

impl UseCaseMetadata for CreateCustomerAccount {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "create_customer_account"
    }

    fn display_name() -> &'static str {
        "Create Customer Account"
    }
}

/// Only inquiries past `new` offer the action.
pub fn is_offered(inquiry: &Inquiry) -> bool {
    !inquiry.is_new()
}

pub fn confirmation_prompt(inquiry: &Inquiry) -> String {
    format!(
        "This will create a new customer account for {} and send them login credentials via email.",
        inquiry.name
    )
}

pub fn create_customer_account(inquiry: &Inquiry) -> Result<AccountCreationNotice, AccountCreationError> {
    if !is_offered(inquiry) {
        return Err(AccountCreationError::InquiryNotReviewed(inquiry.id));
    }
    Ok(AccountCreationNotice {
        inquiry_id: inquiry.id,
        customer_name: inquiry.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::seed_inquiries;

    #[test]
    fn test_prompt_and_notice() {
        let inquiries = seed_inquiries();
        let lisa = &inquiries[5];
        assert_eq!(
            confirmation_prompt(lisa),
            "This will create a new customer account for Lisa Brown and send them login credentials via email."
        );
        let notice = create_customer_account(lisa).unwrap().notice();
        assert_eq!(notice.title, "Account Created");
        assert_eq!(notice.description, "Customer account created for Lisa Brown");
    }

    #[test]
    fn test_new_inquiry_is_rejected() {
        let inquiries = seed_inquiries();
        assert!(!is_offered(&inquiries[0]));
        assert_eq!(
            create_customer_account(&inquiries[0]),
            Err(AccountCreationError::InquiryNotReviewed(InquiryId(1)))
        );
    }

    #[test]
    fn test_full_name() {
        assert_eq!(
            CreateCustomerAccount::full_name(),
            "u502_create_customer_account"
        );
    }
}
