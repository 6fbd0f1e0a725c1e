//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::pagination::PaginationOptions;
use crate::service::CustomerService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Customer data access.
    pub customer_service: Arc<CustomerService>,
    /// Process-wide paging defaults and limits.
    pub pagination: PaginationOptions,
    /// Configured public base URI for page links, if any.
    pub public_base_uri: Option<Arc<str>>,
    /// Size of the generated fake customer listing.
    pub fake_customer_count: usize,
}
