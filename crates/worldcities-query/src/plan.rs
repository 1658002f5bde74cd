//! Query parameters and the composed filter → sort → page plan.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::field::{FieldHandle, Record, fold_case, resolve};
use crate::sorting::SortDirection;

/// Untrusted list parameters as handed over by the caller-facing layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Zero-based page index.
    pub page_index: u64,
    /// Requested page size. Must be positive.
    pub page_size: i64,
    /// Field to sort by.
    pub sort_column: Option<String>,
    /// `"asc"` for ascending, anything else for descending.
    pub sort_order: Option<String>,
    /// Field to prefix-filter on.
    pub filter_column: Option<String>,
    /// Prefix to match.
    pub filter_query: Option<String>,
}

impl QueryParams {
    /// Parameters for a plain page with no sort and no filter.
    pub fn page(page_index: u64, page_size: i64) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    /// Add a sort column and raw sort order.
    pub fn sorted_by(mut self, column: impl Into<String>, order: Option<&str>) -> Self {
        self.sort_column = Some(column.into());
        self.sort_order = order.map(str::to_string);
        self
    }

    /// Add a filter column and prefix.
    pub fn filtered_by(mut self, column: impl Into<String>, query: impl Into<String>) -> Self {
        self.filter_column = Some(column.into());
        self.filter_query = Some(query.into());
        self
    }
}

/// Case-insensitive prefix filter on one field.
#[derive(Debug, Clone)]
pub struct PrefixFilter<R: 'static> {
    field: FieldHandle<R>,
    needle: String,
    folded: String,
}

impl<R: Record> PrefixFilter<R> {
    /// Build a filter matching records whose `field` starts with `needle`.
    pub fn new(field: FieldHandle<R>, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let folded = fold_case(&needle);
        Self {
            field,
            needle,
            folded,
        }
    }

    /// Field being filtered.
    pub fn field(&self) -> FieldHandle<R> {
        self.field
    }

    /// Prefix as supplied.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `record` passes the filter.
    pub fn matches(&self, record: &R) -> bool {
        self.field.starts_with_folded(record, &self.folded)
    }
}

/// Single-key ordering.
#[derive(Debug, Clone)]
pub struct SortSpec<R: 'static> {
    field: FieldHandle<R>,
    direction: SortDirection,
}

impl<R: Record> SortSpec<R> {
    /// Order by `field` in `direction`.
    pub fn new(field: FieldHandle<R>, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Sort field.
    pub fn field(&self) -> FieldHandle<R> {
        self.field
    }

    /// Sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two records under this ordering.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        self.direction.apply(self.field.compare_for_sort(a, b))
    }
}

/// The `(skip, take)` pair selecting one page of the ordered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_index: u64,
    page_size: u64,
}

impl PageWindow {
    /// Window for a validated page size.
    pub fn new(page_index: u64, page_size: u64) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize { page_size: 0 });
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Page size (always positive).
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Rows to skip. Saturates instead of overflowing, which still yields
    /// an empty page.
    pub fn skip(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Rows to take.
    pub fn take(&self) -> u64 {
        self.page_size
    }
}

/// A fully validated query, ready for a source to materialize.
///
/// Stages apply in a fixed order: filter, then count, then sort, then the
/// page window.
#[derive(Debug, Clone)]
pub struct QueryPlan<R: 'static> {
    filter: Option<PrefixFilter<R>>,
    sort: Option<SortSpec<R>>,
    window: PageWindow,
}

impl<R: Record> QueryPlan<R> {
    /// Validate `params` against `R` and compose the plan.
    ///
    /// A named sort or filter column must exist on `R` even when the other
    /// half of the pair is empty.
    pub fn build(params: &QueryParams) -> Result<Self, QueryError> {
        let page_size =
            u64::try_from(params.page_size).map_err(|_| QueryError::InvalidPageSize {
                page_size: params.page_size,
            })?;
        let window = PageWindow::new(params.page_index, page_size)?;

        let filter = match non_empty(params.filter_column.as_deref()) {
            Some(column) => {
                let field = resolve::<R>(column)?;
                non_empty(params.filter_query.as_deref())
                    .map(|needle| PrefixFilter::new(field, needle))
            }
            None => None,
        };

        let sort = match non_empty(params.sort_column.as_deref()) {
            Some(column) => {
                let field = resolve::<R>(column)?;
                let direction = SortDirection::resolve(params.sort_order.as_deref());
                Some(SortSpec::new(field, direction))
            }
            None => None,
        };

        Ok(Self {
            filter,
            sort,
            window,
        })
    }

    /// Filter stage, if any.
    pub fn filter(&self) -> Option<&PrefixFilter<R>> {
        self.filter.as_ref()
    }

    /// Sort stage, if any.
    pub fn sort(&self) -> Option<&SortSpec<R>> {
        self.sort.as_ref()
    }

    /// Page window.
    pub fn window(&self) -> PageWindow {
        self.window
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
