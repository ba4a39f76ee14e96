pub mod admin_login;
pub mod customer_login;
pub mod home;
pub mod not_found;
pub mod settings;
