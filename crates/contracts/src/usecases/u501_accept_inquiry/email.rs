use serde::{Deserialize, Serialize};

use crate::domain::a001_inquiry::{Inquiry, InquiryId};

/// Editable confirmation email for one inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationDraft {
    pub inquiry_id: InquiryId,
    pub customer_name: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub fn confirmation_subject(service: &str) -> String {
    format!("Your Tech Handyman Inquiry - {service}")
}

/// Builds the default draft; the same inquiry always yields the same text.
pub fn confirmation_draft(inquiry: &Inquiry) -> ConfirmationDraft {
    let body = format!(
        "Dear {name},

Thank you for submitting an inquiry about {service_lower} with Tech Handyman. We're pleased to inform you that we've reviewed your request and can assist you.

One of our technicians will contact you shortly to discuss your needs in more detail and schedule a convenient time for service.

Your Inquiry Details:
Service Requested: {service}
Description: {description}

If you have any questions before we contact you, please don't hesitate to reply to this email.

Best regards,
The Tech Handyman Team",
        name = inquiry.name,
        service_lower = inquiry.service.to_lowercase(),
        service = inquiry.service,
        description = inquiry.description,
    );

    ConfirmationDraft {
        inquiry_id: inquiry.id,
        customer_name: inquiry.name.clone(),
        to: inquiry.email.clone(),
        subject: confirmation_subject(&inquiry.service),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::seed_inquiries;

    #[test]
    fn test_draft_uses_inquiry_fields() {
        let inquiry = seed_inquiries().remove(0);
        let draft = confirmation_draft(&inquiry);

        assert_eq!(draft.to, "john.doe@example.com");
        assert_eq!(draft.subject, "Your Tech Handyman Inquiry - PC Troubleshooting");
        assert!(draft.body.starts_with("Dear John Doe,\n\n"));
        assert!(draft
            .body
            .contains("an inquiry about pc troubleshooting with Tech Handyman"));
        assert!(draft.body.contains("Service Requested: PC Troubleshooting\n"));
        assert!(draft.body.contains(&format!("Description: {}\n", inquiry.description)));
        assert!(draft.body.ends_with("The Tech Handyman Team"));
    }

    #[test]
    fn test_draft_is_deterministic() {
        let inquiry = seed_inquiries().remove(4);
        assert_eq!(confirmation_draft(&inquiry), confirmation_draft(&inquiry));
    }
}
