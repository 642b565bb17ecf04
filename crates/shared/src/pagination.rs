//! Page-based pagination utilities.

use serde::{Deserialize, Serialize};

/// Default page size when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard cap on page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 100;

/// `page`/`limit` query parameters as clients send them.
///
/// Out-of-range values are normalized rather than rejected so that a
/// dashboard with a stale bookmark still gets a sensible first page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PageParams {
    /// 1-based page number, floored at 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// SQL OFFSET for the normalized page/limit pair.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Pagination block returned alongside every paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl PageInfo {
    /// Builds the block from the normalized request and a COUNT(*) result.
    ///
    /// An empty collection still reports one page so clients can render
    /// "page 1 of 1" without special-casing.
    pub fn new(params: &PageParams, total_items: i64) -> Self {
        let limit = params.limit();
        let total_pages = if total_items == 0 {
            1
        } else {
            (total_items + limit - 1) / limit
        };

        Self {
            page: params.page(),
            total_pages,
            total_items,
        }
    }
}
