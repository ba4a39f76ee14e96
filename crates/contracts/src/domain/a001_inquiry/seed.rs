use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use super::aggregate::{Inquiry, InquiryId, InquiryStatus};

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn inquiry(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    service: &str,
    status: InquiryStatus,
    submitted_at: NaiveDateTime,
    description: &str,
) -> Inquiry {
    Inquiry {
        id: InquiryId(id),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        service: service.into(),
        status,
        submitted_at,
        description: description.into(),
    }
}

static INQUIRIES: Lazy<Vec<Inquiry>> = Lazy::new(|| {
    use InquiryStatus::*;
    vec![
        inquiry(
            1,
            "John Doe",
            "john.doe@example.com",
            "555-123-4567",
            "PC Troubleshooting",
            New,
            at(2023, 4, 7, 14, 30),
            "My computer is running very slowly and occasionally freezes completely. I've tried restarting it but the problem persists.",
        ),
        inquiry(
            2,
            "Sarah Johnson",
            "sarah.j@example.com",
            "555-987-6543",
            "Network Setup",
            InProgress,
            at(2023, 4, 6, 10, 15),
            "I need assistance setting up a new mesh Wi-Fi system for my two-story home. I'm experiencing dead zones in several rooms.",
        ),
        inquiry(
            3,
            "Mike Williams",
            "mike.w@example.com",
            "555-456-7890",
            "Custom PC Build",
            Accepted,
            at(2023, 4, 5, 16, 45),
            "Looking for a high-performance gaming PC build with the latest RTX graphics card and at least 32GB of RAM.",
        ),
        inquiry(
            4,
            "Emily Rodriguez",
            "emily.r@example.com",
            "555-789-0123",
            "Data Recovery",
            Completed,
            at(2023, 4, 4, 9, 0),
            "I accidentally deleted important work files from my laptop. Need help recovering these files as soon as possible.",
        ),
        inquiry(
            5,
            "David Chen",
            "david.c@example.com",
            "555-234-5678",
            "Virus Removal",
            New,
            at(2023, 4, 7, 11, 20),
            "My computer has become very slow and I'm seeing many pop-up ads. I think I might have a virus or malware.",
        ),
        inquiry(
            6,
            "Lisa Brown",
            "lisa.b@example.com",
            "555-345-6789",
            "Password Recovery",
            Accepted,
            at(2023, 4, 6, 13, 10),
            "I'm locked out of my Windows account and can't reset the password through normal methods.",
        ),
        inquiry(
            7,
            "Robert Garcia",
            "robert.g@example.com",
            "555-567-8901",
            "Printer Setup",
            InProgress,
            at(2023, 4, 5, 15, 30),
            "Need help setting up my new wireless printer to work with multiple devices, including laptops and smartphones.",
        ),
        inquiry(
            8,
            "Jennifer Taylor",
            "jennifer.t@example.com",
            "555-678-9012",
            "System Upgrades",
            New,
            at(2023, 4, 7, 10, 0),
            "My laptop is running slowly and I'd like to upgrade the RAM and possibly install an SSD to improve performance.",
        ),
    ]
});

/// Demo inquiries the admin area starts with.
pub fn seed_inquiries() -> Vec<Inquiry> {
    INQUIRIES.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let all = seed_inquiries();
        let ids: HashSet<_> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_seed_timestamps_are_valid() {
        assert!(seed_inquiries()
            .iter()
            .all(|i| i.submitted_at != NaiveDateTime::default()));
    }
}
