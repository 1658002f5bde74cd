//! # worldcities-query
//!
//! Generic paginated query engine. Given a [`QuerySource`] over a
//! [`Record`] type and untrusted list parameters, [`paginate`] validates the
//! parameters against the record's static field table, composes
//! filter → count → sort → page into a [`QueryPlan`], lets the source
//! materialize it once, and returns an immutable [`PagedResult`].

pub mod engine;
pub mod error;
pub mod field;
pub mod pagination;
pub mod plan;
pub mod sorting;
pub mod source;

pub use engine::paginate;
pub use error::QueryError;
pub use field::{FieldDescriptor, FieldHandle, FieldKind, FieldValue, Record, resolve};
pub use pagination::PagedResult;
pub use plan::{PageWindow, PrefixFilter, QueryParams, QueryPlan, SortSpec};
pub use sorting::SortDirection;
pub use source::{Materialized, MemorySource, QuerySource};
