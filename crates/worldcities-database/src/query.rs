//! SQL push-down of a [`QueryPlan`].
//!
//! The filter, count, ordering and page window are compiled into two
//! statements that run inside one read-only snapshot. Identifiers come from
//! [`TableRecord`] constants and the record's field table; everything the
//! caller typed is bound as a parameter.
//!
//! Text sorts use `COLLATE "C"` so rows come back in the same byte-wise
//! order as the in-memory source. Float columns are rendered through
//! `NUMERIC` for prefix filtering, which never produces exponent notation.
//! Case folding of the filtered value uses PostgreSQL's `LOWER`, which folds
//! ASCII everywhere and non-ASCII letters only under a UTF-8 `LC_CTYPE`.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use worldcities_core::error::{AppError, ErrorKind};
use worldcities_core::result::AppResult;
use worldcities_query::{FieldHandle, FieldKind, Materialized, QueryPlan, QuerySource, Record};

use crate::table::TableRecord;

/// Query source that executes plans against a PostgreSQL table.
pub struct PgQuerySource<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R: TableRecord> PgQuerySource<R> {
    /// Query `R`'s table through `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R> Clone for PgQuerySource<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for PgQuerySource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgQuerySource")
            .field("entity", &R::ENTITY)
            .finish()
    }
}

#[async_trait]
impl<R: TableRecord> QuerySource for PgQuerySource<R> {
    type Record = R;

    async fn execute(&self, plan: &QueryPlan<R>) -> AppResult<Materialized<R>> {
        execute_plan(&self.pool, plan).await
    }
}

/// Count the filtered rows and fetch one ordered page.
pub async fn execute_plan<R: TableRecord>(
    pool: &PgPool,
    plan: &QueryPlan<R>,
) -> AppResult<Materialized<R>> {
    let mut count = count_query(plan);
    let mut page = page_query(plan);
    debug!(table = R::TABLE, sql = page.sql(), "Pushing query down to PostgreSQL");

    let mut tx = pool.begin().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to open query snapshot", e)
    })?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to open query snapshot", e)
        })?;

    let total: i64 = count
        .build_query_scalar::<i64>()
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to count {} rows", R::TABLE),
                e,
            )
        })?;

    let rows = page
        .build_query_as::<R>()
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to fetch {} page", R::TABLE),
                e,
            )
        })?;

    tx.commit().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to close query snapshot", e)
    })?;

    Ok(Materialized {
        rows,
        total_count: u64::try_from(total).unwrap_or_default(),
    })
}

/// `SELECT COUNT(*)` over the filtered table.
pub fn count_query<R: TableRecord>(plan: &QueryPlan<R>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
    builder.push(R::TABLE);
    push_filter(&mut builder, plan);
    builder
}

/// `SELECT *` of the ordered page window.
pub fn page_query<R: TableRecord>(plan: &QueryPlan<R>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM ");
    builder.push(R::TABLE);
    push_filter(&mut builder, plan);

    builder.push(" ORDER BY ");
    match plan.sort() {
        Some(sort) => {
            builder.push(sort.field().column());
            if sort.field().kind() == FieldKind::Text {
                builder.push(" COLLATE \"C\"");
            }
            builder.push(" ").push(sort.direction().as_sql());
            if sort.field().column() != R::KEY_COLUMN {
                builder.push(", ").push(R::KEY_COLUMN).push(" ASC");
            }
        }
        None => {
            builder.push(R::KEY_COLUMN).push(" ASC");
        }
    }

    let window = plan.window();
    builder
        .push(" LIMIT ")
        .push_bind(i64::try_from(window.take()).unwrap_or(i64::MAX))
        .push(" OFFSET ")
        .push_bind(i64::try_from(window.skip()).unwrap_or(i64::MAX));
    builder
}

fn push_filter<R: TableRecord>(builder: &mut QueryBuilder<'static, Postgres>, plan: &QueryPlan<R>) {
    if let Some(filter) = plan.filter() {
        builder.push(" WHERE LOWER(");
        push_text_rendering(builder, filter.field());
        builder
            .push(") LIKE ")
            .push_bind(like_prefix(filter.needle()))
            .push(" ESCAPE '\\'");
    }
}

/// SQL rendering of a field as text, matching `FieldValue::render`.
fn push_text_rendering<R: Record>(
    builder: &mut QueryBuilder<'static, Postgres>,
    field: FieldHandle<R>,
) {
    match field.kind() {
        FieldKind::Float => builder
            .push("CAST(CAST(")
            .push(field.column())
            .push(" AS NUMERIC) AS TEXT)"),
        FieldKind::Integer | FieldKind::Text => builder
            .push("CAST(")
            .push(field.column())
            .push(" AS TEXT)"),
    };
}

/// Case-folded `LIKE` pattern matching values that start with `needle`.
fn like_prefix(needle: &str) -> String {
    format!("{}%", like_escape(&needle.to_lowercase()))
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
