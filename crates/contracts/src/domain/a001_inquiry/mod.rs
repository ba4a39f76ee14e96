mod aggregate;
pub(crate) mod seed;

pub use aggregate::{Inquiry, InquiryId, InquiryStatus, UnknownStatus};
pub use seed::seed_inquiries;
