//! PostgreSQL implementation of the customer store.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::CustomerRow;
use crate::config::GatewayConfig;
use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;

/// PostgreSQL-backed customer store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config` and applies the embedded
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] if the database is unreachable
    /// or a migration fails.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, ApiError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(
            max_connections = config.database_max_connections,
            "connected to postgres"
        );
        Ok(Self::new(pool))
    }

    /// Loads every customer ordered by insertion time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch_all(&self) -> Result<Vec<Customer>, ApiError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, first_name, last_name, contact, email, created_at \
             FROM customers ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Loads a single customer, or `None` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn fetch_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ApiError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, first_name, last_name, contact, email, created_at \
             FROM customers WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    /// Inserts a customer, returning `false` if the id already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] on database failure.
    pub async fn insert(&self, customer: &Customer) -> Result<bool, ApiError> {
        let result = sqlx::query(
            "INSERT INTO customers (id, first_name, last_name, contact, email) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (id) DO NOTHING",
        )
        .bind(*customer.id.as_uuid())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.contact)
        .bind(&customer.email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
