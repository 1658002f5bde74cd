//! Query orchestrator.

use tracing::debug;

use crate::error::QueryError;
use crate::field::Record;
use crate::pagination::{Echo, PagedResult};
use crate::plan::{QueryParams, QueryPlan};
use crate::source::{Materialized, QuerySource};

/// Run one paginated query against `source`.
///
/// Parameters are validated and resolved before the source is touched.
/// The source then materializes filter → count → sort → page in a single
/// call.
pub async fn paginate<S>(
    source: &S,
    params: QueryParams,
) -> Result<PagedResult<S::Record>, QueryError>
where
    S: QuerySource + ?Sized,
{
    let plan = QueryPlan::<S::Record>::build(&params)?;
    let window = plan.window();

    debug!(
        entity = <S::Record as Record>::ENTITY,
        filter = plan.filter().map(|f| f.field().name()),
        sort = plan.sort().map(|s| s.field().name()),
        direction = plan.sort().map(|s| s.direction().as_sql()),
        skip = window.skip(),
        take = window.take(),
        "Executing paginated query"
    );

    let Materialized {
        mut rows,
        total_count,
    } = source.execute(&plan).await?;

    // A source must never return more than one page.
    rows.truncate(usize::try_from(window.take()).unwrap_or(usize::MAX));

    let sort_order = match plan.sort() {
        Some(sort) => Some(sort.direction().as_sql().to_string()),
        None => params.sort_order,
    };

    Ok(PagedResult::new(
        rows,
        total_count,
        window,
        Echo {
            sort_column: params.sort_column,
            sort_order,
            filter_column: params.filter_column,
            filter_query: params.filter_query,
        },
    ))
}
