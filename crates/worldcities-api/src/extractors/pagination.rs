//! List query string extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use worldcities_core::error::AppError;
use worldcities_query::QueryParams;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of a list endpoint, as sent by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Zero-based page index (default: 0).
    #[serde(default)]
    pub page_index: u64,
    /// Rows per page (default: `query.default_page_size`).
    pub page_size: Option<i64>,
    /// Field to sort by.
    pub sort_column: Option<String>,
    /// `asc` or anything else for descending.
    pub sort_order: Option<String>,
    /// Field to prefix-filter on.
    pub filter_column: Option<String>,
    /// Prefix to match.
    pub filter_query: Option<String>,
}

impl ListParams {
    /// Fill in the page size and hand over to the query engine.
    pub fn into_query_params(self, default_page_size: i64) -> QueryParams {
        QueryParams {
            page_index: self.page_index,
            page_size: self.page_size.unwrap_or(default_page_size),
            sort_column: self.sort_column,
            sort_order: self.sort_order,
            filter_column: self.filter_column,
            filter_query: self.filter_query,
        }
    }
}

/// Parsed list parameters with configured defaults applied.
#[derive(Debug, Clone)]
pub struct ListQuery(pub QueryParams);

impl FromRequestParts<AppState> for ListQuery {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(Self(
            params.into_query_params(state.config.query.default_page_size),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_applied() {
        let params = ListParams::default().into_query_params(10);
        assert_eq!(params.page_index, 0);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn test_explicit_page_size_kept() {
        let params = ListParams {
            page_size: Some(0),
            ..ListParams::default()
        };
        assert_eq!(params.into_query_params(10).page_size, 0);
    }
}
