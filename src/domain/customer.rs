//! Customer entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CustomerId;

/// A customer record as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier.
    pub id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number or other contact handle.
    pub contact: String,
    /// E-mail address.
    pub email: String,
}

impl Customer {
    /// Creates a customer with a fresh random id.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case() {
        let customer = Customer::new("Ada", "Lovelace", "+44 20 7946 0000", "ada@example.com");
        let Ok(json) = serde_json::to_value(&customer) else {
            panic!("serialization failed");
        };
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["id"], customer.id.to_string());
    }
}
