//! Paged response assembly.
//!
//! [`PaginationHelper::create_paged_response`] runs the full pipeline for one
//! request: normalize the raw parameters, slice the sequence, count, compute
//! the page total and attach navigation links.

use url::Url;

use super::{
    LinkMode, PageMeta, PageWindow, PagedResponse, PaginationFilter, PaginationOptions,
    ResponseEnvelope, UriService,
};

/// One page of items plus the record count used for page math.
///
/// `total_records` is the length of the page itself, not of the source
/// sequence; page totals are therefore computed from the page alone.
#[derive(Debug, Clone)]
struct PagedData<T> {
    items: Vec<T>,
    total_records: u64,
}

/// Builds paged responses for a single request.
#[derive(Debug, Clone)]
pub struct PaginationHelper {
    options: PaginationOptions,
    uri_service: UriService,
}

impl PaginationHelper {
    /// Creates a helper bound to the process options and a request's URI
    /// service.
    #[must_use]
    pub const fn new(options: PaginationOptions, uri_service: UriService) -> Self {
        Self {
            options,
            uri_service,
        }
    }

    /// Paginates `items` and wraps the page in a successful envelope.
    ///
    /// Raw `page_number` and `page_size` are normalized through a
    /// [`PaginationFilter`]; nothing here is rejected. A page past the end
    /// of the data yields an empty page.
    pub fn create_paged_response<T, I>(
        &self,
        items: I,
        page_number: i64,
        page_size: i64,
        route: &str,
    ) -> PagedResponse<T>
    where
        I: IntoIterator<Item = T>,
    {
        let filter = PaginationFilter::with_values(self.options, page_number, page_size);
        let window = filter.window();

        let paged = slice(items, window);
        tracing::debug!(
            page_number = window.page_number,
            page_size = window.page_size,
            returned = paged.total_records,
            route,
            "built page"
        );

        let mut response =
            ResponseEnvelope::paged(paged.items, window.page_number, window.page_size);
        if let Some(meta) = response.pagination.as_mut() {
            self.add_page_data(meta, window, paged.total_records, route);
        }
        response
    }

    fn add_page_data(
        &self,
        meta: &mut PageMeta,
        window: PageWindow,
        total_records: u64,
        route: &str,
    ) {
        let total_pages = total_pages(total_records, window.page_size);
        let current = u64::from(window.page_number);

        let has_next = current >= 1 && current < total_pages;
        let has_previous = current.saturating_sub(1) >= 1 && current <= total_pages;

        let targets = self.link_targets(window, total_pages);

        meta.next_page = has_next.then(|| self.link(route, targets.next)).flatten();
        meta.previous_page = has_previous.then(|| self.link(route, targets.previous)).flatten();
        meta.first_page = self.link(route, targets.first);
        meta.last_page = self.link(route, targets.last);
        meta.total_pages = Some(total_pages);
        meta.total_records = Some(total_records);
    }

    fn link_targets(&self, window: PageWindow, total_pages: u64) -> LinkTargets {
        match self.options.link_mode() {
            LinkMode::Current => LinkTargets {
                first: window,
                last: window,
                next: window,
                previous: window,
            },
            LinkMode::Targeted => {
                let last = u32::try_from(total_pages.max(1)).unwrap_or(u32::MAX);
                LinkTargets {
                    first: window.at_page(1),
                    last: window.at_page(last),
                    next: window.at_page(window.page_number.saturating_add(1)),
                    previous: window.at_page(window.page_number.saturating_sub(1).max(1)),
                }
            }
        }
    }

    fn link(&self, route: &str, window: PageWindow) -> Option<Url> {
        match self.uri_service.page_uri(route, window) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(route, error = %e, "could not build page link");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LinkTargets {
    first: PageWindow,
    last: PageWindow,
    next: PageWindow,
    previous: PageWindow,
}

/// Skips `(page_number - 1) * page_size` items and keeps up to `page_size`.
fn slice<T, I>(items: I, window: PageWindow) -> PagedData<T>
where
    I: IntoIterator<Item = T>,
{
    let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(window.page_size).unwrap_or(usize::MAX);
    let items: Vec<T> = items.into_iter().skip(skip).take(take).collect();
    let total_records = items.len() as u64;
    PagedData {
        items,
        total_records,
    }
}

/// `ceil(total_records / page_size)` computed in floating point.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn total_pages(total_records: u64, page_size: u32) -> u64 {
    let pages = total_records as f64 / f64::from(page_size.max(1));
    pages.ceil() as u64
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn helper_with(options: PaginationOptions) -> PaginationHelper {
        let Ok(uri_service) = UriService::new(Some("http://localhost:3000")) else {
            panic!("valid base uri");
        };
        PaginationHelper::new(options, uri_service)
    }

    fn helper() -> PaginationHelper {
        helper_with(PaginationOptions::default())
    }

    fn meta<T>(response: &PagedResponse<T>) -> &PageMeta {
        let Some(meta) = response.page() else {
            panic!("paged response without metadata");
        };
        meta
    }

    fn items(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_of_twenty_five() {
        let response = helper().create_paged_response(items(25), 1, 10, "/api/customer");
        assert!(response.succeeded);
        assert_eq!(response.data, Some(items(10)));

        let meta = meta(&response);
        assert_eq!(meta.total_records, Some(10));
        assert_eq!(meta.total_pages, Some(1));
        assert!(meta.next_page.is_none());
        assert!(meta.previous_page.is_none());
        assert!(meta.first_page.is_some());
        assert!(meta.last_page.is_some());
    }

    #[test]
    fn totals_come_from_the_page_not_the_source() {
        let response = helper().create_paged_response(items(1000), 2, 10, "/api/customer");
        let meta = meta(&response);
        assert_eq!(meta.total_records, Some(10));
        assert_eq!(meta.total_pages, Some(1));
        // page 2 > one total page: no previous link either.
        assert!(meta.previous_page.is_none());
        assert!(meta.next_page.is_none());
    }

    #[test]
    fn preserves_order_of_the_window() {
        let response = helper().create_paged_response(items(25), 3, 10, "/r");
        assert_eq!(response.data, Some(vec![21, 22, 23, 24, 25]));
        let meta = meta(&response);
        assert_eq!(meta.total_records, Some(5));
        assert_eq!(meta.total_pages, Some(1));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let response = helper().create_paged_response(items(5), 9, 10, "/r");
        assert_eq!(response.data, Some(Vec::new()));
        let meta = meta(&response);
        assert_eq!(meta.page_number, 9);
        assert_eq!(meta.total_records, Some(0));
        assert_eq!(meta.total_pages, Some(0));
        assert!(meta.next_page.is_none());
        assert!(meta.previous_page.is_none());
    }

    #[test]
    fn zero_parameters_use_defaults() {
        let response = helper().create_paged_response(items(30), 0, 0, "/r");
        let meta = meta(&response);
        assert_eq!((meta.page_number, meta.page_size), (1, 10));
        assert_eq!(response.data.map(|d| d.len()), Some(10));
    }

    #[test]
    fn oversized_page_size_uses_default() {
        let response = helper().create_paged_response(items(100), 1, 999, "/r");
        assert_eq!(meta(&response).page_size, 10);
    }

    #[test]
    fn slice_length_formula_holds() {
        let helper = helper();
        for len in [0_u32, 1, 9, 10, 11, 47] {
            for page in 1_i64..=6 {
                for size in [1_i64, 3, 10, 50] {
                    let response = helper.create_paged_response(items(len), page, size, "/r");
                    let skipped = (page - 1) * size;
                    let expected = size.min((i64::from(len) - skipped).max(0));
                    let got = response.data.map_or(0, |d| d.len());
                    assert_eq!(got as i64, expected, "len={len} page={page} size={size}");
                }
            }
        }
    }

    #[test]
    fn link_presence_rules() {
        assert!(!has_next(1, 1));
        assert!(has_next(1, 2));
        assert!(!has_next(2, 2));
        assert!(!has_previous(1, 5));
        assert!(has_previous(2, 2));
        assert!(!has_previous(3, 2));
    }

    fn has_next(page: u32, total_pages: u64) -> bool {
        let mut meta = PageMeta::new(page, 10);
        let window = PageWindow { page_number: page, page_size: 10 };
        helper().add_page_data(&mut meta, window, total_pages * 10, "/r");
        meta.next_page.is_some()
    }

    fn has_previous(page: u32, total_pages: u64) -> bool {
        let mut meta = PageMeta::new(page, 10);
        let window = PageWindow { page_number: page, page_size: 10 };
        helper().add_page_data(&mut meta, window, total_pages * 10, "/r");
        meta.previous_page.is_some()
    }

    #[test]
    fn current_mode_links_are_identical() {
        let mut meta = PageMeta::new(2, 10);
        let window = PageWindow { page_number: 2, page_size: 10 };
        helper().add_page_data(&mut meta, window, 40, "/api/customer");

        let expected = "http://localhost:3000/api/customer?pageNumber=2&pageSize=10";
        for link in [&meta.first_page, &meta.last_page, &meta.next_page, &meta.previous_page] {
            assert_eq!(link.as_ref().map(Url::as_str), Some(expected));
        }
    }

    #[test]
    fn targeted_mode_links_point_at_their_pages() {
        let options = PaginationOptions::default().with_link_mode(LinkMode::Targeted);
        let mut meta = PageMeta::new(2, 10);
        let window = PageWindow { page_number: 2, page_size: 10 };
        helper_with(options).add_page_data(&mut meta, window, 40, "/api/customer");

        let page_of = |link: &Option<Url>| {
            link.as_ref().and_then(|u| {
                u.query_pairs()
                    .find(|(k, _)| k == "pageNumber")
                    .map(|(_, v)| v.into_owned())
            })
        };
        assert_eq!(page_of(&meta.first_page).as_deref(), Some("1"));
        assert_eq!(page_of(&meta.last_page).as_deref(), Some("4"));
        assert_eq!(page_of(&meta.next_page).as_deref(), Some("3"));
        assert_eq!(page_of(&meta.previous_page).as_deref(), Some("1"));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}
