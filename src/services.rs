pub mod checksum;
pub mod name;
pub mod email;
pub mod phone;
pub mod password;
pub mod customer_service;
pub use customer_service::CustomerService;
