//! Binding between record types and their PostgreSQL tables.

use sqlx::FromRow;
use sqlx::postgres::PgRow;

use worldcities_entity::{City, Country};
use worldcities_query::Record;

/// A [`Record`] stored in a single table keyed by an integer column.
///
/// Table and key names are compile-time constants. Together with the field
/// table's column names they are the only identifiers ever spliced into SQL.
pub trait TableRecord: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Primary key column; also the natural row order.
    const KEY_COLUMN: &'static str;
}

impl TableRecord for City {
    const TABLE: &'static str = "cities";
    const KEY_COLUMN: &'static str = "id";
}

impl TableRecord for Country {
    const TABLE: &'static str = "countries";
    const KEY_COLUMN: &'static str = "id";
}
