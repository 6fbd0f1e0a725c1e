//! Persistence layer: customer storage.
//!
//! [`CustomerStore`] selects between the PostgreSQL backend (`sqlx::PgPool`)
//! and an in-memory backend used when persistence is disabled.

pub mod memory;
pub mod models;
pub mod postgres;

use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;

pub use memory::InMemoryCustomerStore;
pub use postgres::PostgresCustomerStore;

/// Customer storage backend.
#[derive(Debug)]
pub enum CustomerStore {
    /// Durable PostgreSQL storage.
    Postgres(PostgresCustomerStore),
    /// Process-local storage.
    InMemory(InMemoryCustomerStore),
}

impl CustomerStore {
    /// Loads every customer in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch_all(&self) -> Result<Vec<Customer>, ApiError> {
        match self {
            Self::Postgres(store) => store.fetch_all().await,
            Self::InMemory(store) => Ok(store.fetch_all().await),
        }
    }

    /// Loads one customer, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ApiError> {
        match self {
            Self::Postgres(store) => store.fetch_by_id(id).await,
            Self::InMemory(store) => Ok(store.fetch_by_id(id).await),
        }
    }

    /// Stores a customer, returning `false` if the id is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn insert(&self, customer: Customer) -> Result<bool, ApiError> {
        match self {
            Self::Postgres(store) => store.insert(&customer).await,
            Self::InMemory(store) => Ok(store.insert(customer).await),
        }
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }
}

impl From<PostgresCustomerStore> for CustomerStore {
    fn from(store: PostgresCustomerStore) -> Self {
        Self::Postgres(store)
    }
}

impl From<InMemoryCustomerStore> for CustomerStore {
    fn from(store: InMemoryCustomerStore) -> Self {
        Self::InMemory(store)
    }
}
