pub mod card;
pub mod detail_modal;
pub mod page;

pub use card::ServiceCard;
pub use detail_modal::ServiceDetailModal;
pub use page::ServicesPage;
