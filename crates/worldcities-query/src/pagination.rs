//! Paged result snapshot returned by the query engine.

use serde::Serialize;

use crate::plan::PageWindow;

/// One page of a filtered, sorted collection plus the numbers a client
/// needs to render "page X of Y" and build next/previous links.
///
/// Built once per query and never mutated; all derived values are computed
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    data: Vec<T>,
    page_index: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
    sort_column: Option<String>,
    sort_order: Option<String>,
    filter_column: Option<String>,
    filter_query: Option<String>,
    has_previous_page: bool,
    has_next_page: bool,
}

/// Parameters echoed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Echo {
    /// Sort column as requested.
    pub sort_column: Option<String>,
    /// Normalized direction when sorting applied, raw input otherwise.
    pub sort_order: Option<String>,
    /// Filter column as requested.
    pub filter_column: Option<String>,
    /// Filter prefix as requested.
    pub filter_query: Option<String>,
}

impl<T> PagedResult<T> {
    pub(crate) fn new(data: Vec<T>, total_count: u64, window: PageWindow, echo: Echo) -> Self {
        let page_index = window.page_index();
        let page_size = window.page_size();
        let total_pages = total_count.div_ceil(page_size);
        Self {
            data,
            page_index,
            page_size,
            total_count,
            total_pages,
            sort_column: echo.sort_column,
            sort_order: echo.sort_order,
            filter_column: echo.filter_column,
            filter_query: echo.filter_query,
            has_previous_page: page_index > 0,
            has_next_page: page_index.saturating_add(1) < total_pages,
        }
    }

    /// Rows of this page.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the result, keeping only the rows.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Page size.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Rows matching the filter, before paging.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// `ceil(total_count / page_size)`.
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Echoed sort column.
    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    /// Echoed sort order.
    pub fn sort_order(&self) -> Option<&str> {
        self.sort_order.as_deref()
    }

    /// Echoed filter column.
    pub fn filter_column(&self) -> Option<&str> {
        self.filter_column.as_deref()
    }

    /// Echoed filter prefix.
    pub fn filter_query(&self) -> Option<&str> {
        self.filter_query.as_deref()
    }

    /// Whether a page precedes this one.
    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether a page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }
}
