use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::list::ListRecord;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(pub u32);

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of an inquiry.
///
/// Only `New -> Accepted` is ever performed by the admin UI; the other values
/// come from the seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Accepted,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 4] = [
        InquiryStatus::New,
        InquiryStatus::InProgress,
        InquiryStatus::Accepted,
        InquiryStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::InProgress => "in-progress",
            InquiryStatus::Accepted => "accepted",
            InquiryStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::InProgress => "In Progress",
            InquiryStatus::Accepted => "Accepted",
            InquiryStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заявка клиента на услугу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Requested service, free text.
    pub service: String,
    pub status: InquiryStatus,
    #[serde(rename = "date")]
    pub submitted_at: NaiveDateTime,
    pub description: String,
}

impl Inquiry {
    pub fn is_new(&self) -> bool {
        self.status == InquiryStatus::New
    }

    /// Copy of the inquiry with another status; the original is untouched.
    pub fn with_status(self, status: InquiryStatus) -> Self {
        Self { status, ..self }
    }
}

impl ListRecord for Inquiry {
    type Id = InquiryId;
    type Status = InquiryStatus;

    fn id(&self) -> InquiryId {
        self.id
    }

    fn status(&self) -> InquiryStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.service.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&InquiryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: InquiryStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(back, InquiryStatus::Accepted);
    }

    #[test]
    fn test_status_from_str() {
        for status in InquiryStatus::ALL {
            assert_eq!(status.as_str().parse::<InquiryStatus>(), Ok(status));
        }
        assert!("closed".parse::<InquiryStatus>().is_err());
    }
}
