//! Pagination core: parameter normalization, page slicing, page-count
//! metadata and navigation links.
//!
//! ```text
//! raw (page_number, page_size) ──► PaginationFilter ──► PageWindow
//!                                                           │
//! items ──────────────────────────► slice ◄─────────────────┤
//!                                     │                     │
//!                                     ▼                     ▼
//!                           PagedResponse ◄── UriService (links)
//! ```
//!
//! Everything here is synchronous and request-scoped, except
//! [`PaginationOptions`] which is built once at startup.

pub mod filter;
pub mod helper;
pub mod options;
pub mod response;
pub mod uri;

pub use filter::{PageWindow, PaginationFilter};
pub use helper::PaginationHelper;
pub use options::{LinkMode, PaginationOptions};
pub use response::{PageMeta, PagedResponse, ResponseEnvelope};
pub use uri::UriService;
