mod dto;
mod overview;

pub use dto::{AdminOverview, StatCard, UpcomingTask};
pub use overview::{admin_overview, inquiries_link, RECENT_LIMIT};
