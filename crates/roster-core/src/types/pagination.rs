//! Pagination types for paged searches.
//!
//! A [`PageRequest`] is an offset/limit window over an ordered result set.
//! Negative values are a caller contract violation and are rejected by
//! [`PageRequest::validate`] instead of being clamped.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::sorting::SortField;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// How the total row count of a page is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountStrategy {
    /// Always issue a separate count query.
    Always,
    /// Skip the count query when a first page comes back shorter than its
    /// limit, since that page already holds every matching row.
    #[default]
    SkipOnShortFirstPage,
}

impl CountStrategy {
    /// Return the total implied by the fetched page, if the strategy allows
    /// eliding the count query for it.
    pub fn elided_total(&self, page: &PageRequest, fetched: usize) -> Option<u64> {
        match self {
            Self::Always => None,
            Self::SkipOnShortFirstPage => {
                if page.offset == 0 && (fetched as i64) < page.limit {
                    Some(fetched as u64)
                } else {
                    None
                }
            }
        }
    }
}

/// Request parameters for paginated queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of leading rows to skip.
    #[serde(default)]
    pub offset: i64,
    /// Maximum number of rows to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Requested ordering; empty means store default order.
    #[serde(default)]
    pub sort: Vec<SortField>,
}

impl PageRequest {
    /// Create a new page request from an explicit offset and limit.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            sort: Vec::new(),
        }
    }

    /// Create a request for a 0-based page number of the given size.
    pub fn of(page: i64, size: i64) -> Self {
        Self::new(page.saturating_mul(size), size)
    }

    /// Attach an ordering.
    pub fn with_sort(mut self, sort: Vec<SortField>) -> Self {
        self.sort = sort;
        self
    }

    /// Reject negative paging values.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.offset < 0 {
            return Err(AppError::invalid_argument(format!(
                "offset must not be negative, got {}",
                self.offset
            )));
        }
        if self.limit < 0 {
            return Err(AppError::invalid_argument(format!(
                "limit must not be negative, got {}",
                self.limit
            )));
        }
        Ok(())
    }

    /// The 0-based page number this window starts on.
    pub fn page_number(&self) -> i64 {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// A bounded slice of a result set plus the size of the unbounded set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The rows in this window.
    pub content: Vec<T>,
    /// Number of rows matching the query across all pages.
    pub total_count: u64,
    /// Offset the window started at.
    pub offset: i64,
    /// Requested window size.
    pub limit: i64,
    /// 0-based page number.
    pub page_number: i64,
    /// Number of pages of `limit` rows needed to hold `total_count`.
    pub total_pages: u64,
    /// Whether rows exist past this window.
    pub has_next: bool,
    /// Whether rows exist before this window.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Create a page for the given request.
    pub fn new(content: Vec<T>, total_count: u64, request: &PageRequest) -> Self {
        let limit = request.limit.max(0) as u64;
        let total_pages = if limit == 0 {
            0
        } else {
            total_count.div_ceil(limit)
        };
        let end = request.offset.max(0) as u64 + content.len() as u64;
        Self {
            has_next: end < total_count,
            has_previous: request.offset > 0,
            page_number: request.page_number(),
            total_pages,
            offset: request.offset,
            limit: request.limit,
            total_count,
            content,
        }
    }

    /// Number of rows in this window.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this window holds no rows.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Transform every row while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_count: self.total_count,
            offset: self.offset,
            limit: self.limit,
            page_number: self.page_number,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_of_computes_offset() {
        let page = PageRequest::of(2, 10);
        assert_eq!(page.offset, 20);
        assert_eq!(page.limit, 10);
        assert_eq!(page.page_number(), 2);
    }

    #[test]
    fn test_validate_rejects_negatives() {
        assert!(PageRequest::new(0, 0).validate().is_ok());
        assert_eq!(
            PageRequest::new(-1, 10).validate().unwrap_err().kind,
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            PageRequest::new(0, -5).validate().unwrap_err().kind,
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], 4, &PageRequest::new(0, 3));
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next);
        assert!(!page.has_previous);

        let last = Page::new(vec![4], 4, &PageRequest::new(3, 3));
        assert_eq!(last.page_number, 1);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn test_zero_limit_page() {
        let page: Page<i32> = Page::new(Vec::new(), 4, &PageRequest::new(0, 0));
        assert_eq!(page.total_pages, 0);
        assert!(page.has_next);
        assert!(page.is_empty());
    }

    #[test]
    fn test_elided_total_only_on_short_first_page() {
        let strategy = CountStrategy::SkipOnShortFirstPage;
        assert_eq!(strategy.elided_total(&PageRequest::new(0, 3), 2), Some(2));
        assert_eq!(strategy.elided_total(&PageRequest::new(0, 3), 3), None);
        assert_eq!(strategy.elided_total(&PageRequest::new(3, 3), 1), None);
        assert_eq!(strategy.elided_total(&PageRequest::new(0, 0), 0), None);
        assert_eq!(
            CountStrategy::Always.elided_total(&PageRequest::new(0, 3), 2),
            None
        );
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 2, &PageRequest::new(0, 5)).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_count, 2);
    }
}
