//! # customer-gateway
//!
//! REST API exposing a paginated customer listing and single-customer
//! lookup over a PostgreSQL-backed collection.
//!
//! The interesting part is the [`pagination`] core: it normalizes
//! client-supplied paging parameters against configured limits, slices the
//! customer sequence, computes page-count metadata and builds navigation
//! links, all wrapped in a uniform [`pagination::ResponseEnvelope`].
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │       └── PaginationHelper (pagination/)
//!     │
//!     ├── CustomerService (service/)
//!     │
//!     └── CustomerStore (persistence/)
//!             ├── PostgreSQL
//!             └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod persistence;
pub mod service;
