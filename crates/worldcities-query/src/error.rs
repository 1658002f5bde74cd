//! Query engine errors.

use thiserror::Error;

use worldcities_core::error::{AppError, ErrorKind};

/// Reasons a paginated query can be rejected or fail.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A sort or filter column does not name a field of the record type.
    #[error("Property '{field}' does not exist on {entity}")]
    FieldNotFound {
        /// Record type that was queried.
        entity: &'static str,
        /// Field name as supplied by the caller.
        field: String,
    },

    /// The requested page size is zero or negative.
    #[error("Page size must be greater than zero (got {page_size})")]
    InvalidPageSize {
        /// Page size as supplied by the caller.
        page_size: i64,
    },

    /// The record source failed while materializing the plan.
    #[error(transparent)]
    Source(#[from] AppError),
}

impl QueryError {
    /// Whether the error was caused by the caller's parameters.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Source(_))
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::FieldNotFound { ref field, .. } => {
                let details = serde_json::json!({ "field": field });
                AppError::new(ErrorKind::Validation, err.to_string()).with_details(details)
            }
            QueryError::InvalidPageSize { page_size } => {
                let details = serde_json::json!({ "pageSize": page_size });
                AppError::new(ErrorKind::Validation, err.to_string()).with_details(details)
            }
            QueryError::Source(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_not_found_maps_to_validation() {
        let err = QueryError::FieldNotFound {
            entity: "City",
            field: "bogus".to_string(),
        };
        assert!(err.is_caller_error());

        let app: AppError = err.into();
        assert_eq!(app.kind, ErrorKind::Validation);
        assert_eq!(app.message, "Property 'bogus' does not exist on City");
        assert_eq!(app.details, Some(serde_json::json!({ "field": "bogus" })));
    }

    #[test]
    fn test_source_error_passes_through() {
        let err = QueryError::from(AppError::database("connection reset"));
        assert!(!err.is_caller_error());

        let app: AppError = err.into();
        assert_eq!(app.kind, ErrorKind::Database);
        assert!(app.details.is_none());
    }
}
