//! Admin settings page state. Nothing is persisted; "Save" only acknowledges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown settings field: {0}")]
pub struct UnknownField(pub String);

// ============================================================================
// Company profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: "Tech Handyman".into(),
            email: "admin@techhandyman.com".into(),
            phone: "555-123-4567".into(),
            address: "123 Tech Street, San Francisco, CA 94107".into(),
            website: "https://techhandyman.com".into(),
        }
    }
}

impl CompanyProfile {
    /// (field name, label) in form order.
    pub const FIELDS: [(&'static str, &'static str); 5] = [
        ("companyName", "Company Name"),
        ("email", "Business Email"),
        ("phone", "Business Phone"),
        ("website", "Website"),
        ("address", "Business Address"),
    ];

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "companyName" => &self.company_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "website" => &self.website,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Updates one field by its form name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let slot = match name {
            "companyName" => &mut self.company_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "address" => &mut self.address,
            "website" => &mut self.website,
            other => return Err(UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }
}

// ============================================================================
// Email templates
// ============================================================================

pub const INQUIRY_CONFIRMATION_PLACEHOLDERS: [&str; 4] =
    ["[Customer Name]", "[Service Type]", "[Description]", "[Date]"];

pub const ACCOUNT_CREATION_PLACEHOLDERS: [&str; 4] =
    ["[Customer Name]", "[Username]", "[Password]", "[Login URL]"];

const DEFAULT_INQUIRY_CONFIRMATION: &str = "Dear [Customer Name],

Thank you for submitting an inquiry with Tech Handyman. We've received your request regarding [Service Type] and will review it shortly.

We typically respond to all inquiries within 24 hours during business days.

Your Inquiry Details:
- Service Requested: [Service Type]
- Description: [Description]

If you need to add any additional information to your inquiry, please reply to this email.

Best regards,
The Tech Handyman Team";

const DEFAULT_ACCOUNT_CREATION: &str = "Dear [Customer Name],

Thank you for choosing Tech Handyman for your technical needs. We're pleased to inform you that we've created a customer account for you.

Your account details:
- Username: [Username]
- Password: [Password]

Please login at [Login URL] to access your customer portal where you can view the status of your inquiries, approved estimates, and invoices.

For security reasons, we recommend changing your password after your first login.

If you have any questions, please don't hesitate to contact us.

Best regards,
The Tech Handyman Team";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplates {
    pub inquiry_confirmation: String,
    pub account_creation: String,
}

impl Default for EmailTemplates {
    fn default() -> Self {
        Self {
            inquiry_confirmation: DEFAULT_INQUIRY_CONFIRMATION.into(),
            account_creation: DEFAULT_ACCOUNT_CREATION.into(),
        }
    }
}

/// Replaces every `[Placeholder]` occurrence; unknown placeholders stay as typed.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    NewInquiryEmail,
    InquiryStatusEmail,
    CustomerAccountEmail,
    PaymentReceivedEmail,
    NewInquirySms,
    InquiryStatusSms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 6] = [
        NotificationKind::NewInquiryEmail,
        NotificationKind::InquiryStatusEmail,
        NotificationKind::CustomerAccountEmail,
        NotificationKind::PaymentReceivedEmail,
        NotificationKind::NewInquirySms,
        NotificationKind::InquiryStatusSms,
    ];

    pub fn channel(&self) -> Channel {
        match self {
            NotificationKind::NewInquirySms | NotificationKind::InquiryStatusSms => Channel::Sms,
            _ => Channel::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::NewInquiryEmail => "New Inquiry Notification",
            NotificationKind::InquiryStatusEmail => "Inquiry Status Updates",
            NotificationKind::CustomerAccountEmail => "New Customer Account",
            NotificationKind::PaymentReceivedEmail => "Payment Received",
            NotificationKind::NewInquirySms => "New Inquiry SMS",
            NotificationKind::InquiryStatusSms => "Inquiry Status SMS",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            NotificationKind::NewInquiryEmail => "Receive an email when a new inquiry is submitted",
            NotificationKind::InquiryStatusEmail => "Receive emails when an inquiry status changes",
            NotificationKind::CustomerAccountEmail => {
                "Receive an email when a new customer account is created"
            }
            NotificationKind::PaymentReceivedEmail => "Receive an email when a customer makes a payment",
            NotificationKind::NewInquirySms => "Receive an SMS when a new inquiry is submitted",
            NotificationKind::InquiryStatusSms => "Receive SMS when an inquiry status changes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub new_inquiry_email: bool,
    #[serde(rename = "newInquirySMS")]
    pub new_inquiry_sms: bool,
    pub inquiry_status_email: bool,
    #[serde(rename = "inquiryStatusSMS")]
    pub inquiry_status_sms: bool,
    pub customer_account_email: bool,
    pub payment_received_email: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            new_inquiry_email: true,
            new_inquiry_sms: false,
            inquiry_status_email: true,
            inquiry_status_sms: false,
            customer_account_email: true,
            payment_received_email: true,
        }
    }
}

impl NotificationSettings {
    fn slot(&mut self, kind: NotificationKind) -> &mut bool {
        match kind {
            NotificationKind::NewInquiryEmail => &mut self.new_inquiry_email,
            NotificationKind::InquiryStatusEmail => &mut self.inquiry_status_email,
            NotificationKind::CustomerAccountEmail => &mut self.customer_account_email,
            NotificationKind::PaymentReceivedEmail => &mut self.payment_received_email,
            NotificationKind::NewInquirySms => &mut self.new_inquiry_sms,
            NotificationKind::InquiryStatusSms => &mut self.inquiry_status_sms,
        }
    }

    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::NewInquiryEmail => self.new_inquiry_email,
            NotificationKind::InquiryStatusEmail => self.inquiry_status_email,
            NotificationKind::CustomerAccountEmail => self.customer_account_email,
            NotificationKind::PaymentReceivedEmail => self.payment_received_email,
            NotificationKind::NewInquirySms => self.new_inquiry_sms,
            NotificationKind::InquiryStatusSms => self.inquiry_status_sms,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) {
        let slot = self.slot(kind);
        *slot = !*slot;
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        *self.slot(kind) = enabled;
    }
}

pub fn settings_saved() -> Notice {
    Notice::success("Settings Saved", "Your changes have been successfully saved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_set_field() {
        let mut profile = CompanyProfile::default();
        profile.set_field("companyName", "Tech Handyman LLC").unwrap();
        assert_eq!(profile.company_name, "Tech Handyman LLC");
        assert_eq!(profile.field("companyName"), Some("Tech Handyman LLC"));
        assert_eq!(
            profile.set_field("fax", "555"),
            Err(UnknownField("fax".into()))
        );
        for (name, _) in CompanyProfile::FIELDS {
            assert!(profile.field(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_notification_defaults_and_toggle() {
        let mut settings = NotificationSettings::default();
        let enabled: Vec<_> = NotificationKind::ALL
            .into_iter()
            .filter(|k| settings.is_enabled(*k))
            .collect();
        assert_eq!(enabled.len(), 4);
        assert!(!settings.is_enabled(NotificationKind::NewInquirySms));

        settings.toggle(NotificationKind::NewInquirySms);
        assert!(settings.is_enabled(NotificationKind::NewInquirySms));
        settings.toggle(NotificationKind::NewInquirySms);
        assert_eq!(settings, NotificationSettings::default());
    }

    #[test]
    fn test_notification_wire_names() {
        let json = serde_json::to_value(NotificationSettings::default()).unwrap();
        assert_eq!(json["newInquirySMS"], false);
        assert_eq!(json["paymentReceivedEmail"], true);
    }

    #[test]
    fn test_templates_mention_their_placeholders() {
        let templates = EmailTemplates::default();
        for placeholder in ["[Customer Name]", "[Service Type]", "[Description]"] {
            assert!(templates.inquiry_confirmation.contains(placeholder));
        }
        for placeholder in ACCOUNT_CREATION_PLACEHOLDERS {
            assert!(templates.account_creation.contains(placeholder));
        }
    }

    #[test]
    fn test_fill_placeholders() {
        let text = fill_placeholders(
            "Dear [Customer Name], about [Service Type] on [Date].",
            &[("[Customer Name]", "John Doe"), ("[Service Type]", "Network Setup")],
        );
        assert_eq!(text, "Dear John Doe, about Network Setup on [Date].");
    }
}
