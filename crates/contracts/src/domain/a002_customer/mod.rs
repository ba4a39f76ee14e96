mod aggregate;
mod seed;

pub use aggregate::{Customer, CustomerId, CustomerStatus};
pub use seed::seed_customers;
