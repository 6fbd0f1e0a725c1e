//! Data Transfer Objects for REST request/response serialization.

pub mod customer_dto;

pub use customer_dto::*;
