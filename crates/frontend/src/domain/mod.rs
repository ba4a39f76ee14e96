pub mod a001_inquiry;
pub mod a002_customer;
pub mod a003_service_offering;
