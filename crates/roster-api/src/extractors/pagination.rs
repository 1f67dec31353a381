//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use roster_core::result::AppResult;
use roster_core::types::form::empty_as_none;
use roster_core::types::{PageRequest, SortField};

/// Query parameters for paginated endpoints.
///
/// Either an explicit `offset`/`limit` window or a 0-based `page` of `size`
/// rows. When `page` is given it wins over `offset`. Values are passed
/// through unclamped; negative ones are rejected downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows to skip.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<i64>,
    /// Rows to return.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    /// 0-based page number.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    /// Page size; alias of `limit`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<i64>,
    /// Comma-separated `field[:asc|desc][:nulls_first|nulls_last]` terms.
    #[serde(default)]
    pub sort: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, using `default_size` when neither
    /// `limit` nor `size` is given.
    pub fn into_page_request(self, default_size: i64) -> AppResult<PageRequest> {
        let size = self.limit.or(self.size).unwrap_or(default_size);
        let request = match self.page {
            Some(page) => PageRequest::of(page, size),
            None => PageRequest::new(self.offset.unwrap_or(0), size),
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => SortField::parse_list(raw)?,
            None => Vec::new(),
        };
        Ok(request.with_sort(sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::types::SortDirection;

    #[test]
    fn test_defaults() {
        let request = PaginationParams::default().into_page_request(20).unwrap();
        assert_eq!(request, PageRequest::new(0, 20));
    }

    #[test]
    fn test_page_and_size() {
        let params = PaginationParams {
            page: Some(2),
            size: Some(5),
            offset: Some(99),
            ..Default::default()
        };
        assert_eq!(params.into_page_request(20).unwrap(), PageRequest::new(10, 5));
    }

    #[test]
    fn test_negative_values_pass_through() {
        let params = PaginationParams {
            offset: Some(-3),
            limit: Some(-1),
            ..Default::default()
        };
        let request = params.into_page_request(20).unwrap();
        assert_eq!((request.offset, request.limit), (-3, -1));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_sort() {
        let params = PaginationParams {
            sort: Some("age:desc,username".to_string()),
            ..Default::default()
        };
        let request = params.into_page_request(20).unwrap();
        assert_eq!(request.sort.len(), 2);
        assert_eq!(request.sort[0].direction, SortDirection::Desc);
        assert_eq!(request.sort[1].field, "username");
    }
}
