pub mod d400_admin_overview;

pub use d400_admin_overview::ui::AdminDashboard;
