pub mod common;
pub mod u501_accept_inquiry;
pub mod u502_create_customer_account;
pub mod u503_submit_inquiry;
pub mod u504_request_password_reset;
