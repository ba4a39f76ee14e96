use once_cell::sync::Lazy;

use super::aggregate::{Customer, CustomerId, CustomerStatus};
use crate::domain::a001_inquiry::seed::at;

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer {
            id: CustomerId(1),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "555-123-4567".into(),
            username: "JohnDoe123".into(),
            address: "123 Main St, Anytown, CA 12345".into(),
            created_at: at(2023, 2, 15, 10, 30),
            status: CustomerStatus::Active,
            inquiry_count: 3,
            jobs_completed: 2,
        },
        Customer {
            id: CustomerId(2),
            name: "Sarah Johnson".into(),
            email: "sarah.j@example.com".into(),
            phone: "555-987-6543".into(),
            username: "SarahJ456".into(),
            address: "456 Oak Ave, Somewhere, CA 67890".into(),
            created_at: at(2023, 3, 10, 14, 45),
            status: CustomerStatus::Active,
            inquiry_count: 1,
            jobs_completed: 1,
        },
        Customer {
            id: CustomerId(3),
            name: "Mike Williams".into(),
            email: "mike.w@example.com".into(),
            phone: "555-456-7890".into(),
            username: "MikeW789".into(),
            address: "789 Pine Rd, Nowhere, CA 45678".into(),
            created_at: at(2023, 1, 5, 9, 15),
            status: CustomerStatus::Inactive,
            inquiry_count: 4,
            jobs_completed: 0,
        },
        Customer {
            id: CustomerId(4),
            name: "Emily Rodriguez".into(),
            email: "emily.r@example.com".into(),
            phone: "555-789-0123".into(),
            username: "EmilyR101".into(),
            address: "101 Cedar Ln, Elsewhere, CA 10112".into(),
            created_at: at(2023, 3, 25, 16, 20),
            status: CustomerStatus::Active,
            inquiry_count: 2,
            jobs_completed: 2,
        },
        Customer {
            id: CustomerId(5),
            name: "David Chen".into(),
            email: "david.c@example.com".into(),
            phone: "555-234-5678".into(),
            username: "DavidC234".into(),
            address: "234 Maple Dr, Anywhere, CA 23456".into(),
            created_at: at(2023, 2, 28, 11, 10),
            status: CustomerStatus::Active,
            inquiry_count: 5,
            jobs_completed: 3,
        },
    ]
});

/// Demo customer accounts shown in the admin area.
pub fn seed_customers() -> Vec<Customer> {
    CUSTOMERS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_counts_are_consistent() {
        for customer in seed_customers() {
            assert!(customer.inquiry_count >= customer.jobs_completed, "{}", customer.name);
        }
    }

    #[test]
    fn test_job_summary() {
        let customers = seed_customers();
        let first = &customers[0];
        assert_eq!(first.job_summary(), "3 (2 completed)");
        assert!(first.is_active());
    }
}
