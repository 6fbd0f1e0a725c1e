//! Domain layer: the customer entity, its identifier, and sample data.

pub mod customer;
pub mod customer_id;
pub mod sample;

pub use customer::Customer;
pub use customer_id::CustomerId;
