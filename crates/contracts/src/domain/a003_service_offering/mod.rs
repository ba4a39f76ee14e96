mod aggregate;
mod catalog;

pub use aggregate::ServiceOffering;
pub use catalog::{catalog, featured, find, service_titles};
