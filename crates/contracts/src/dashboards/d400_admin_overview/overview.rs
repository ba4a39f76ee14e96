use super::dto::{AdminOverview, StatCard, UpcomingTask};
use crate::domain::a001_inquiry::{Inquiry, InquiryStatus};
use crate::domain::a002_customer::Customer;
use crate::system::routes::SiteRoute;

pub const RECENT_LIMIT: usize = 5;

/// Inquiry list pre-filtered by status.
pub fn inquiries_link(status: InquiryStatus) -> String {
    format!("{}?status={}", SiteRoute::AdminInquiries.path(), status)
}

fn count(inquiries: &[Inquiry], status: InquiryStatus) -> usize {
    inquiries.iter().filter(|i| i.status == status).count()
}

pub fn admin_overview(inquiries: &[Inquiry], customers: &[Customer]) -> AdminOverview {
    let stats = vec![
        StatCard {
            title: "New Inquiries",
            value: count(inquiries, InquiryStatus::New),
            description: "Pending review",
            icon: "file-text",
            link: inquiries_link(InquiryStatus::New),
        },
        StatCard {
            title: "Active Customers",
            value: customers.iter().filter(|c| c.is_active()).count(),
            description: "Total registered customers",
            icon: "users",
            link: SiteRoute::AdminCustomers.path().to_string(),
        },
        StatCard {
            title: "Jobs in Progress",
            value: count(inquiries, InquiryStatus::InProgress),
            description: "Currently being worked on",
            icon: "clock",
            link: inquiries_link(InquiryStatus::InProgress),
        },
        StatCard {
            title: "Completed Jobs",
            value: count(inquiries, InquiryStatus::Completed),
            description: "Finished and closed",
            icon: "check-circle",
            link: inquiries_link(InquiryStatus::Completed),
        },
    ];

    let mut recent = inquiries.to_vec();
    // stable sort: equal timestamps keep store order
    recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    recent.truncate(RECENT_LIMIT);

    let upcoming_tasks = inquiries
        .iter()
        .filter(|i| matches!(i.status, InquiryStatus::Accepted | InquiryStatus::InProgress))
        .map(|i| UpcomingTask {
            title: format!("{} - {}", i.service, i.name),
            address: customers
                .iter()
                .find(|c| c.email.eq_ignore_ascii_case(&i.email))
                .map(|c| c.address.clone()),
            status_label: if i.status == InquiryStatus::InProgress {
                "In Progress"
            } else {
                "Confirmed"
            },
        })
        .collect();

    AdminOverview {
        stats,
        recent_inquiries: recent,
        upcoming_tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inquiry::seed_inquiries;
    use crate::domain::a002_customer::seed_customers;

    #[test]
    fn test_stats_from_seed() {
        let overview = admin_overview(&seed_inquiries(), &seed_customers());
        let values: Vec<_> = overview.stats.iter().map(|s| (s.title, s.value)).collect();
        assert_eq!(
            values,
            vec![
                ("New Inquiries", 3),
                ("Active Customers", 4),
                ("Jobs in Progress", 2),
                ("Completed Jobs", 1),
            ]
        );
        assert_eq!(overview.stats[0].link, "/admin/inquiries?status=new");
        assert_eq!(overview.stats[2].link, "/admin/inquiries?status=in-progress");
        assert_eq!(overview.stats[1].link, "/admin/customers");
    }

    #[test]
    fn test_recent_inquiries_newest_first() {
        let overview = admin_overview(&seed_inquiries(), &[]);
        let names: Vec<_> = overview
            .recent_inquiries
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "John Doe",
                "David Chen",
                "Jennifer Taylor",
                "Lisa Brown",
                "Sarah Johnson",
            ]
        );
    }

    #[test]
    fn test_upcoming_tasks_join_customer_address() {
        let overview = admin_overview(&seed_inquiries(), &seed_customers());
        assert_eq!(overview.upcoming_tasks.len(), 4);
        let sarah = &overview.upcoming_tasks[0];
        assert_eq!(sarah.title, "Network Setup - Sarah Johnson");
        assert_eq!(
            sarah.address.as_deref(),
            Some("456 Oak Ave, Somewhere, CA 67890")
        );
        assert_eq!(sarah.status_label, "In Progress");
        // Lisa Brown has no customer account
        assert!(overview.upcoming_tasks[2].address.is_none());
    }
}
