//! Country repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use worldcities_core::error::{AppError, ErrorKind};
use worldcities_core::result::AppResult;
use worldcities_core::traits::Repository;
use worldcities_entity::{Country, CountryDraft};
use worldcities_query::{Materialized, QueryPlan, QuerySource};

use crate::query::PgQuerySource;

/// Repository for country lookups, writes and paginated listing.
#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: PgPool,
    source: PgQuerySource<Country>,
}

impl CountryRepository {
    /// Create a new country repository.
    pub fn new(pool: PgPool) -> Self {
        let source = PgQuerySource::new(pool.clone());
        Self { pool, source }
    }
}

#[async_trait]
impl Repository<Country, CountryDraft> for CountryRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Country>> {
        sqlx::query_as::<_, Country>("SELECT * FROM countries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find country by id", e)
            })
    }

    async fn create(&self, draft: &CountryDraft) -> AppResult<Country> {
        sqlx::query_as::<_, Country>(
            "INSERT INTO countries (name, iso2, iso3) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.iso2)
        .bind(&draft.iso3)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create country", e))
    }

    async fn update(&self, id: i32, draft: &CountryDraft) -> AppResult<Option<Country>> {
        sqlx::query_as::<_, Country>(
            "UPDATE countries SET name = $2, iso2 = $3, iso3 = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.iso2)
        .bind(&draft.iso3)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update country", e))
    }
}

#[async_trait]
impl QuerySource for CountryRepository {
    type Record = Country;

    async fn execute(&self, plan: &QueryPlan<Country>) -> AppResult<Materialized<Country>> {
        self.source.execute(plan).await
    }
}
