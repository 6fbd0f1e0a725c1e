//! In-memory customer store used when persistence is disabled and in tests.

use tokio::sync::RwLock;

use crate::domain::{Customer, CustomerId};

/// Insertion-ordered customer list behind a [`tokio::sync::RwLock`].
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `customers` in the given order.
    #[must_use]
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }

    /// Returns every customer in insertion order.
    pub async fn fetch_all(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// Returns the customer with this id, if any.
    pub async fn fetch_by_id(&self, id: CustomerId) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Appends a customer, returning `false` if the id already exists.
    pub async fn insert(&self, customer: Customer) -> bool {
        let mut customers = self.customers.write().await;
        if customers.iter().any(|c| c.id == customer.id) {
            return false;
        }
        customers.push(customer);
        true
    }

    /// Number of stored customers.
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Returns `true` if the store holds no customers.
    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}
