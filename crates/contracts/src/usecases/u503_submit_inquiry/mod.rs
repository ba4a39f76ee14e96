//! Public inquiry form.

use serde::{Deserialize, Serialize};

use crate::domain::a003_service_offering::service_titles;
use crate::shared::notice::Notice;
use crate::shared::validation::{
    require_email, require_min_len, require_phone, ValidationError, ValidationErrors,
};
use crate::usecases::common::UseCaseMetadata;

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
}

/// Validated form, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub description: String,
}

impl InquiryForm {
    pub fn validate(&self) -> Result<InquirySubmission, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.push(require_min_len(
            "name",
            &self.name,
            2,
            "Name must be at least 2 characters.",
        ));
        errors.push(require_email("email", &self.email));
        errors.push(require_phone("phone", &self.phone));
        errors.push(require_service(&self.service));
        errors.push(require_min_len(
            "description",
            &self.description,
            10,
            "Please provide at least 10 characters describing your issue.",
        ));
        errors.into_result()?;

        Ok(InquirySubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.clone(),
            description: self.description.trim().to_string(),
        })
    }
}

fn require_service(service: &str) -> Result<(), ValidationError> {
    if service_titles().contains(&service) {
        Ok(())
    } else {
        Err(ValidationError::new("service", "Please select a service."))
    }
}

pub fn submitted_notice() -> Notice {
    Notice::success(
        "Inquiry Submitted",
        "Thank you! We've received your inquiry and will contact you within 24 hours.",
    )
}

pub struct SubmitInquiry;

impl UseCaseMetadata for SubmitInquiry {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "submit_inquiry"
    }

    fn display_name() -> &'static str {
        "Submit inquiry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InquiryForm {
        InquiryForm {
            name: " Alex Kim ".into(),
            email: "alex@example.com".into(),
            phone: "(555) 010-2233".into(),
            service: "Network Setup".into(),
            description: "Wi-Fi drops every evening upstairs.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Alex Kim");
        assert_eq!(submission.service, "Network Setup");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = InquiryForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "service", "description"]);
    }

    #[test]
    fn test_service_must_come_from_catalog() {
        let mut form = filled();
        form.service = "Lawn Mowing".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.for_field("service"), Some("Please select a service."));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn test_short_description() {
        let mut form = filled();
        form.description = "help".into();
        assert!(form.validate().unwrap_err().for_field("description").is_some());
    }
}
