//! Process-wide pagination settings.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// How navigation links pick the page they point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Every link carries the current window. Matches the historical API,
    /// where first/last/next/previous were indistinguishable.
    #[default]
    Current,
    /// Each link carries its own target page (1, last, n + 1, n - 1).
    Targeted,
}

impl FromStr for LinkMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "targeted" => Ok(Self::Targeted),
            other => Err(ApiError::InvalidConfiguration(format!(
                "unknown pagination link mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Targeted => f.write_str("targeted"),
        }
    }
}

/// Default and maximum values for page number and page size.
///
/// Built once at startup and copied into every per-request
/// [`super::PaginationFilter`]. Construction through [`PaginationOptions::new`]
/// guarantees `default_page_number >= 1`, `default_page_size >= 1` and
/// `max_page_size >= default_page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    default_page_number: u32,
    default_page_size: u32,
    max_page_size: u32,
    link_mode: LinkMode,
}

impl PaginationOptions {
    /// Default page number used when none is configured.
    pub const DEFAULT_PAGE_NUMBER: u32 = 1;
    /// Default page size used when none is configured.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    /// Maximum page size used when none is configured.
    pub const MAX_PAGE_SIZE: u32 = 50;

    /// Creates validated pagination options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfiguration`] if a default is zero or the
    /// maximum page size is smaller than the default page size.
    pub fn new(
        default_page_number: u32,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Result<Self, ApiError> {
        if default_page_number == 0 {
            return Err(ApiError::InvalidConfiguration(
                "default page number must be at least 1".to_string(),
            ));
        }
        if default_page_size == 0 {
            return Err(ApiError::InvalidConfiguration(
                "default page size must be at least 1".to_string(),
            ));
        }
        if max_page_size < default_page_size {
            return Err(ApiError::InvalidConfiguration(format!(
                "max page size {max_page_size} is smaller than default page size {default_page_size}"
            )));
        }
        Ok(Self {
            default_page_number,
            default_page_size,
            max_page_size,
            link_mode: LinkMode::default(),
        })
    }

    /// Returns a copy using the given link mode.
    #[must_use]
    pub const fn with_link_mode(mut self, link_mode: LinkMode) -> Self {
        self.link_mode = link_mode;
        self
    }

    /// Page number applied when the client sends none or a non-positive one.
    #[must_use]
    pub const fn default_page_number(&self) -> u32 {
        self.default_page_number
    }

    /// Page size applied when the client sends none or an out-of-range one.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Largest page size accepted verbatim.
    #[must_use]
    pub const fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Link generation policy.
    #[must_use]
    pub const fn link_mode(&self) -> LinkMode {
        self.link_mode
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            default_page_number: Self::DEFAULT_PAGE_NUMBER,
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            max_page_size: Self::MAX_PAGE_SIZE,
            link_mode: LinkMode::Current,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let options = PaginationOptions::default();
        assert_eq!(options.default_page_number(), 1);
        assert_eq!(options.default_page_size(), 10);
        assert_eq!(options.max_page_size(), 50);
        assert_eq!(options.link_mode(), LinkMode::Current);
    }

    #[test]
    fn rejects_zero_defaults() {
        assert!(matches!(
            PaginationOptions::new(0, 10, 50),
            Err(ApiError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            PaginationOptions::new(1, 0, 50),
            Err(ApiError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_max_below_default() {
        let result = PaginationOptions::new(1, 20, 10);
        assert!(matches!(result, Err(ApiError::InvalidConfiguration(_))));
    }

    #[test]
    fn max_equal_to_default_is_valid() {
        let Ok(options) = PaginationOptions::new(1, 10, 10) else {
            panic!("equal default and max should be accepted");
        };
        assert_eq!(options.max_page_size(), 10);
    }

    #[test]
    fn link_mode_parses_case_insensitively() {
        assert_eq!("Targeted".parse::<LinkMode>().ok(), Some(LinkMode::Targeted));
        assert_eq!(" current ".parse::<LinkMode>().ok(), Some(LinkMode::Current));
        assert!("sideways".parse::<LinkMode>().is_err());
    }

    #[test]
    fn link_mode_display_round_trips() {
        for mode in [LinkMode::Current, LinkMode::Targeted] {
            assert_eq!(mode.to_string().parse::<LinkMode>().ok(), Some(mode));
        }
    }
}
