//! Per-request paging state.
//!
//! [`PaginationFilter`] holds the effective page number and page size for a
//! single request and normalizes every assignment against the configured
//! [`PaginationOptions`]. Out-of-range values are never clamped: they fall
//! back to the configured default.

use serde::Serialize;

use super::PaginationOptions;

/// Normalized `(page_number, page_size)` pair describing one page window.
///
/// Produced by [`PaginationFilter::window`] and passed by value wherever a
/// page window is needed, so link generation never reads stale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// 1-indexed page number.
    pub page_number: u32,
    /// Items per page.
    pub page_size: u32,
}

impl PageWindow {
    /// Number of items preceding this window.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Returns the same window positioned at `page_number`.
    #[must_use]
    pub const fn at_page(self, page_number: u32) -> Self {
        Self {
            page_number,
            page_size: self.page_size,
        }
    }
}

/// Effective paging parameters for one request.
///
/// Invariants: `page_number >= 1` and `1 <= page_size <= max_page_size`.
#[derive(Debug, Clone)]
pub struct PaginationFilter {
    options: PaginationOptions,
    page_number: u32,
    page_size: u32,
}

impl PaginationFilter {
    /// Creates a filter initialized to the configured defaults.
    #[must_use]
    pub fn new(options: PaginationOptions) -> Self {
        Self {
            options,
            page_number: options.default_page_number(),
            page_size: options.default_page_size(),
        }
    }

    /// Creates a filter and assigns the raw client values through the
    /// normalizing setters.
    #[must_use]
    pub fn with_values(options: PaginationOptions, page_number: i64, page_size: i64) -> Self {
        let mut filter = Self::new(options);
        filter.set_page_number(page_number);
        filter.set_page_size(page_size);
        filter
    }

    /// Effective page number.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Effective page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Assigns the page number. Non-positive values reset to the default;
    /// positive values are kept even past the end of the data.
    pub fn set_page_number(&mut self, value: i64) {
        self.page_number = match u32::try_from(value) {
            Ok(n) if n > 0 => n,
            Ok(_) => self.options.default_page_number(),
            // Negative values reset; values past u32::MAX saturate.
            Err(_) if value < 0 => self.options.default_page_number(),
            Err(_) => u32::MAX,
        };
    }

    /// Assigns the page size. Non-positive values and values above
    /// `max_page_size` reset to the default.
    pub fn set_page_size(&mut self, value: i64) {
        let max = i64::from(self.options.max_page_size());
        self.page_size = if value <= 0 || value > max {
            self.options.default_page_size()
        } else {
            u32::try_from(value).unwrap_or(self.options.default_page_size())
        };
    }

    /// Snapshot of the current normalized state.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        PageWindow {
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}
