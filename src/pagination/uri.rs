//! Page navigation URI construction.

use url::Url;

use super::PageWindow;
use crate::error::ApiError;

/// Builds absolute page URIs from a base URI and a route.
#[derive(Debug, Clone)]
pub struct UriService {
    base_uri: String,
}

impl UriService {
    /// Creates a URI service for the given base (e.g. `https://api.example.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfiguration`] if the base URI is absent,
    /// blank, or not an absolute URI.
    pub fn new(base_uri: Option<&str>) -> Result<Self, ApiError> {
        let base_uri = base_uri
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::InvalidConfiguration("base URI is not set".to_string()))?;

        Url::parse(base_uri).map_err(|e| {
            ApiError::InvalidConfiguration(format!("invalid base URI {base_uri:?}: {e}"))
        })?;

        Ok(Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
        })
    }

    /// Base URI without a trailing slash.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns `base_uri + route` with `pageNumber` and `pageSize` appended
    /// from `window`. Existing query parameters on `route` are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `base_uri + route` does not
    /// form a valid URI.
    pub fn page_uri(&self, route: &str, window: PageWindow) -> Result<Url, ApiError> {
        let joined = if route.is_empty() || route.starts_with('/') {
            format!("{}{route}", self.base_uri)
        } else {
            format!("{}/{route}", self.base_uri)
        };

        let mut url = Url::parse(&joined)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid route {route:?}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("pageNumber", &window.page_number.to_string())
            .append_pair("pageSize", &window.page_size.to_string());
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn window(page_number: u32, page_size: u32) -> PageWindow {
        PageWindow {
            page_number,
            page_size,
        }
    }

    #[test]
    fn missing_base_uri_is_configuration_error() {
        assert!(matches!(
            UriService::new(None),
            Err(ApiError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            UriService::new(Some("   ")),
            Err(ApiError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn relative_base_uri_is_rejected() {
        assert!(matches!(
            UriService::new(Some("localhost/api")),
            Err(ApiError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn appends_page_parameters() {
        let Ok(service) = UriService::new(Some("https://localhost:5001")) else {
            panic!("valid base uri");
        };
        let Ok(uri) = service.page_uri("/api/customer", window(2, 10)) else {
            panic!("valid route");
        };
        assert_eq!(
            uri.as_str(),
            "https://localhost:5001/api/customer?pageNumber=2&pageSize=10"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let Ok(service) = UriService::new(Some("http://example.com/")) else {
            panic!("valid base uri");
        };
        assert_eq!(service.base_uri(), "http://example.com");
        let Ok(uri) = service.page_uri("api/customer", window(1, 5)) else {
            panic!("valid route");
        };
        assert_eq!(
            uri.as_str(),
            "http://example.com/api/customer?pageNumber=1&pageSize=5"
        );
    }

    #[test]
    fn existing_query_is_preserved() {
        let Ok(service) = UriService::new(Some("http://example.com")) else {
            panic!("valid base uri");
        };
        let Ok(uri) = service.page_uri("/api/customer?active=true", window(3, 20)) else {
            panic!("valid route");
        };
        assert_eq!(uri.query(), Some("active=true&pageNumber=3&pageSize=20"));
    }
}
