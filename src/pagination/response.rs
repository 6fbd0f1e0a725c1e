//! Uniform response envelope with optional page metadata.
//!
//! Every JSON body produced by the API is a [`ResponseEnvelope`]. Listing
//! endpoints attach a [`PageMeta`], whose fields are flattened next to the
//! envelope fields:
//!
//! ```json
//! { "data": [], "succeeded": true, "errors": null, "message": "",
//!   "pageNumber": 1, "pageSize": 10,
//!   "firstPage": "...", "lastPage": "...",
//!   "totalPages": 1, "totalRecords": 10,
//!   "nextPage": null, "previousPage": null }
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;

/// Success/error wrapper around a response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Response payload; `null` on failure.
    pub data: Option<T>,
    /// Whether the operation succeeded.
    pub succeeded: bool,
    /// Error messages, `null` when there are none.
    pub errors: Option<Vec<String>>,
    /// Additional information, empty on success.
    pub message: String,
    /// Page metadata for listing responses.
    #[serde(flatten)]
    pub pagination: Option<PageMeta>,
}

/// Envelope carrying one page of items.
pub type PagedResponse<T> = ResponseEnvelope<Vec<T>>;

impl<T> ResponseEnvelope<T> {
    /// Envelope with no data, `succeeded = false`, no errors and an empty
    /// message.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            succeeded: false,
            errors: None,
            message: String::new(),
            pagination: None,
        }
    }

    /// Successful envelope around `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            succeeded: true,
            errors: None,
            message: String::new(),
            pagination: None,
        }
    }

    /// Successful envelope around a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `data` is `None`.
    pub fn from_option(data: Option<T>) -> Result<Self, ApiError> {
        data.map(Self::success)
            .ok_or_else(|| ApiError::InvalidArgument("data must not be absent".to_string()))
    }

    /// Failed envelope with a message and error list.
    #[must_use]
    pub const fn failed(message: String, errors: Vec<String>) -> Self {
        Self {
            data: None,
            succeeded: false,
            errors: Some(errors),
            message,
            pagination: None,
        }
    }

    /// Successful envelope around one page of data. Page number and page
    /// size are raised to at least 1.
    #[must_use]
    pub fn paged(data: T, page_number: u32, page_size: u32) -> Self {
        Self {
            pagination: Some(PageMeta::new(page_number, page_size)),
            ..Self::success(data)
        }
    }

    /// Page metadata, if this is a listing response.
    #[must_use]
    pub const fn page(&self) -> Option<&PageMeta> {
        self.pagination.as_ref()
    }
}

impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Page metadata and navigation links for a listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Page number of this response (at least 1).
    pub page_number: u32,
    /// Items per page (at least 1).
    pub page_size: u32,
    /// Link to the first page.
    pub first_page: Option<Url>,
    /// Link to the last page.
    pub last_page: Option<Url>,
    /// Number of pages.
    pub total_pages: Option<u64>,
    /// Number of records counted for this response.
    pub total_records: Option<u64>,
    /// Link to the next page, when one exists.
    pub next_page: Option<Url>,
    /// Link to the previous page, when one exists.
    pub previous_page: Option<Url>,
}

impl PageMeta {
    /// Metadata with no links or totals yet.
    #[must_use]
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
            first_page: None,
            last_page: None,
            total_pages: None,
            total_records: None,
            next_page: None,
            previous_page: None,
        }
    }
}
