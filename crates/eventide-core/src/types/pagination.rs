//! Pagination types for repository queries.

use serde::{Deserialize, Serialize};

/// Default page size, applied when the caller supplies a non-positive one.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Construction normalizes rather than errors: a page below 1 becomes 1
/// and a non-positive page size falls back to the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request from raw caller input.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = if page < 1 { 1 } else { page as u64 };
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            (page_size as u64).min(MAX_PAGE_SIZE)
        };
        Self { page, page_size }
    }

    /// Number of documents to skip before the requested window.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Size of the requested window.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response. The derived fields follow fixed
    /// formulas: `total_pages = ceil(total_items / page_size)` (0 for an
    /// empty result), `has_next = page < total_pages` and
    /// `has_previous = page > 1` regardless of the total.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(page_size);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Create an empty response, with the derived fields computed by the
    /// same formulas as [`PageResponse::new`].
    pub fn empty(page_request: &PageRequest) -> Self {
        Self::new(Vec::new(), page_request.page, page_request.page_size, 0)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_non_positive_input() {
        let page = PageRequest::new(0, -5);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_caps_oversized_page_size() {
        let page = PageRequest::new(2, 5000);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(3, 20);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_offset_saturates_on_huge_page_numbers() {
        let page = PageRequest::new(i64::MAX, 100);
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn test_page_math() {
        let resp = PageResponse::new(vec![1, 2, 3], 2, 3, 7);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(resp.has_previous);

        let last = PageResponse::new(vec![7], 3, 3, 7);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let resp: PageResponse<i32> = PageResponse::new(Vec::new(), 1, 10, 0);
        assert_eq!(resp.total_pages, 0);
        assert!(!resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn test_empty_response_beyond_first_page_reports_previous() {
        // has_previous depends on the page number alone, even with no
        // matching documents at all.
        let resp: PageResponse<i32> = PageResponse::empty(&PageRequest::new(5, 10));
        assert_eq!(resp.page, 5);
        assert_eq!(resp.total_items, 0);
        assert_eq!(resp.total_pages, 0);
        assert!(!resp.has_next);
        assert!(resp.has_previous);
    }
}
