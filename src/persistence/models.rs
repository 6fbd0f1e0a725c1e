//! Database models for customer rows.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Customer, CustomerId};

/// A stored row from the `customers` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRow {
    /// Primary key.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact handle.
    pub contact: String,
    /// E-mail address.
    pub email: String,
    /// Insertion timestamp; defines listing order.
    pub created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: CustomerId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            contact: row.contact,
            email: row.email,
        }
    }
}
