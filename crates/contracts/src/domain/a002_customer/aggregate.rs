use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::a001_inquiry::UnknownStatus;
use crate::shared::list::ListRecord;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CustomerStatus::Active),
            "inactive" => Ok(CustomerStatus::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Учётная запись клиента
///
/// `inquiry_count >= jobs_completed` holds for the seed data but is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub address: String,
    #[serde(rename = "dateCreated")]
    pub created_at: NaiveDateTime,
    pub status: CustomerStatus,
    pub inquiry_count: u32,
    pub jobs_completed: u32,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    /// "3 (2 completed)"
    pub fn job_summary(&self) -> String {
        format!("{} ({} completed)", self.inquiry_count, self.jobs_completed)
    }
}

impl ListRecord for Customer {
    type Id = CustomerId;
    type Status = CustomerStatus;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn status(&self) -> CustomerStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.username.as_str()]
    }
}
