//! Customer service: the data source behind the customer endpoints.

use crate::domain::sample::generate_customers;
use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;
use crate::persistence::CustomerStore;

/// Read access to customers, plus startup seeding.
///
/// Lookups for unknown ids return `Ok(None)`; turning that into a 404 is
/// the HTTP layer's job. Store failures propagate unchanged.
#[derive(Debug)]
pub struct CustomerService {
    store: CustomerStore,
}

impl CustomerService {
    /// Creates a new `CustomerService`.
    #[must_use]
    pub fn new(store: impl Into<CustomerStore>) -> Self {
        Self {
            store: store.into(),
        }
    }

    /// Returns a reference to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &CustomerStore {
        &self.store
    }

    /// Returns every customer, in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] if the store cannot be read.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.store.fetch_all().await.inspect_err(|e| {
            tracing::warn!(backend = self.store.backend(), error = %e, "listing customers failed");
        })
    }

    /// Returns the customer with `id`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] if the store cannot be read.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, ApiError> {
        self.store.fetch_by_id(id).await.inspect_err(|e| {
            tracing::warn!(%id, backend = self.store.backend(), error = %e, "customer lookup failed");
        })
    }

    /// Inserts `count` generated customers if the store is empty. Returns
    /// the number inserted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] if the store cannot be read or
    /// written.
    pub async fn seed_if_empty(&self, count: usize) -> Result<usize, ApiError> {
        if !self.store.fetch_all().await?.is_empty() {
            return Ok(0);
        }
        let mut inserted = 0;
        for customer in generate_customers(count) {
            if self.store.insert(customer).await? {
                inserted += 1;
            }
        }
        tracing::info!(inserted, backend = self.store.backend(), "seeded sample customers");
        Ok(inserted)
    }
}
