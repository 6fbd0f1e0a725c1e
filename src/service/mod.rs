//! Service layer: business logic orchestration.
//!
//! [`CustomerService`] supplies customer data to the HTTP layer; paging is
//! applied afterwards by [`crate::pagination::PaginationHelper`].

pub mod customer_service;

pub use customer_service::CustomerService;
