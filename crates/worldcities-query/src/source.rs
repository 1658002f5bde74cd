//! Record sources that materialize a [`QueryPlan`].

use async_trait::async_trait;

use worldcities_core::result::AppResult;

use crate::field::Record;
use crate::plan::QueryPlan;

/// The rows of one page plus the post-filter, pre-paging row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized<R> {
    /// Rows inside the page window, in plan order.
    pub rows: Vec<R>,
    /// Number of rows matching the filter stage.
    pub total_count: u64,
}

/// A lazily evaluated collection of records.
///
/// Implementations receive the whole composed plan at once and may push
/// filter, ordering and limit down into storage. The engine calls
/// [`execute`](QuerySource::execute) exactly once per query.
#[async_trait]
pub trait QuerySource: Send + Sync {
    /// Record type produced by this source.
    type Record: Record;

    /// Count the filtered rows and fetch the ordered page window.
    async fn execute(
        &self,
        plan: &QueryPlan<Self::Record>,
    ) -> AppResult<Materialized<Self::Record>>;
}

/// In-memory source over an owned vector. Its natural order is insertion
/// order, and sorting is stable with respect to it.
#[derive(Debug, Clone, Default)]
pub struct MemorySource<R> {
    records: Vec<R>,
}

impl<R: Record + Clone> MemorySource<R> {
    /// Wrap a set of records.
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Records in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Run `plan` synchronously.
    pub fn run(&self, plan: &QueryPlan<R>) -> Materialized<R> {
        let mut matched: Vec<&R> = match plan.filter() {
            Some(filter) => self.records.iter().filter(|r| filter.matches(r)).collect(),
            None => self.records.iter().collect(),
        };
        let total_count = matched.len() as u64;

        if let Some(sort) = plan.sort() {
            matched.sort_by(|a, b| sort.compare(a, b));
        }

        let window = plan.window();
        let skip = usize::try_from(window.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.take()).unwrap_or(usize::MAX);
        let rows = matched.into_iter().skip(skip).take(take).cloned().collect();

        Materialized { rows, total_count }
    }
}

impl<R: Record + Clone> From<Vec<R>> for MemorySource<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

#[async_trait]
impl<R: Record + Clone> QuerySource for MemorySource<R> {
    type Record = R;

    async fn execute(&self, plan: &QueryPlan<R>) -> AppResult<Materialized<R>> {
        Ok(self.run(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::tests::Place;
    use crate::plan::QueryParams;

    fn source() -> MemorySource<Place> {
        MemorySource::new(vec![
            Place::new(1, "Paris", 48.85),
            Place::new(2, "Oslo", 59.91),
            Place::new(3, "Parma", 44.80),
            Place::new(4, "Rome", 41.90),
            Place::new(5, "Porto", 41.15),
        ])
    }

    fn names(rows: &[Place]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_run_without_stages_keeps_source_order() {
        let plan = QueryPlan::build(&QueryParams::page(0, 3)).unwrap();
        let page = source().run(&plan);
        assert_eq!(page.total_count, 5);
        assert_eq!(names(&page.rows), vec!["Paris", "Oslo", "Parma"]);
    }

    #[test]
    fn test_run_counts_after_filter() {
        let params = QueryParams::page(0, 1).filtered_by("name", "par");
        let plan = QueryPlan::build(&params).unwrap();
        let page = source().run(&plan);
        assert_eq!(page.total_count, 2);
        assert_eq!(names(&page.rows), vec!["Paris"]);
    }

    #[test]
    fn test_run_sorts_before_paging() {
        let params = QueryParams::page(1, 2).sorted_by("lat", Some("asc"));
        let plan = QueryPlan::build(&params).unwrap();
        let page = source().run(&plan);
        assert_eq!(names(&page.rows), vec!["Parma", "Paris"]);
    }

    #[test]
    fn test_run_stable_on_ties() {
        let tied = MemorySource::new(vec![
            Place::new(1, "B", 1.0),
            Place::new(2, "A", 1.0),
            Place::new(3, "C", 1.0),
        ]);
        for order in ["asc", "desc"] {
            let params = QueryParams::page(0, 10).sorted_by("lat", Some(order));
            let plan = QueryPlan::build(&params).unwrap();
            assert_eq!(names(&tied.run(&plan).rows), vec!["B", "A", "C"]);
        }
    }

    #[test]
    fn test_run_text_sort_is_ordinal() {
        let mixed = MemorySource::new(vec![
            Place::new(1, "aachen", 50.8),
            Place::new(2, "Zurich", 47.4),
            Place::new(3, "Bern", 46.9),
        ]);
        let params = QueryParams::page(0, 10).sorted_by("name", Some("asc"));
        let plan = QueryPlan::build(&params).unwrap();
        assert_eq!(names(&mixed.run(&plan).rows), vec!["Bern", "Zurich", "aachen"]);
    }

    #[test]
    fn test_run_far_page_is_empty() {
        let plan = QueryPlan::build(&QueryParams::page(u64::MAX, 2)).unwrap();
        let page = source().run(&plan);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 5);
    }
}
