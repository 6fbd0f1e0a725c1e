//! Customer request/response shapes.
//!
//! [`PageQuery`] is the listing query string. The response types mirror the
//! JSON produced by [`crate::pagination::ResponseEnvelope`] and exist so the
//! OpenAPI document can describe the flattened envelope precisely.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Customer;

/// Paging query parameters for list endpoints.
///
/// Missing values are treated as `0`, which the pagination filter replaces
/// with the configured default.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Requested page (1-indexed). Non-positive values use the default.
    pub page_number: Option<i64>,
    /// Requested page size. Non-positive or oversized values use the default.
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Raw `(page_number, page_size)` with missing values as `0`.
    #[must_use]
    pub fn raw(&self) -> (i64, i64) {
        (self.page_number.unwrap_or(0), self.page_size.unwrap_or(0))
    }
}

/// Paged customer listing, as returned by `GET /api/customer`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    /// Customers on this page.
    pub data: Vec<Customer>,
    /// Always `true` for a listing.
    pub succeeded: bool,
    /// Always `null` for a listing.
    pub errors: Option<Vec<String>>,
    /// Always empty for a listing.
    pub message: String,
    /// Effective page number.
    pub page_number: u32,
    /// Effective page size.
    pub page_size: u32,
    /// Link to the first page.
    pub first_page: Option<String>,
    /// Link to the last page.
    pub last_page: Option<String>,
    /// Page count, derived from the records on this page.
    pub total_pages: Option<u64>,
    /// Number of records on this page.
    pub total_records: Option<u64>,
    /// Link to the next page.
    pub next_page: Option<String>,
    /// Link to the previous page.
    pub previous_page: Option<String>,
}

/// Single customer, as returned by `GET /api/customer/{id}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailResponse {
    /// The customer.
    pub data: Customer,
    /// Always `true`.
    pub succeeded: bool,
    /// Always `null`.
    pub errors: Option<Vec<String>>,
    /// Always empty.
    pub message: String,
}

/// Failed envelope returned with every 4xx/5xx status.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `null`.
    pub data: Option<serde_json::Value>,
    /// Always `false`.
    pub succeeded: bool,
    /// `"<code>: <message>"` entries; `null` for a bare empty envelope.
    pub errors: Option<Vec<String>>,
    /// Human-readable error message.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn query_reads_camel_case_keys() {
        let Ok(query) = serde_json::from_str::<PageQuery>(r#"{"pageNumber":3,"pageSize":-1}"#)
        else {
            panic!("valid query");
        };
        assert_eq!(query.raw(), (3, -1));
    }

    #[test]
    fn missing_query_values_are_zero() {
        assert_eq!(PageQuery::default().raw(), (0, 0));
    }
}
