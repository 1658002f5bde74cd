//! City repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use worldcities_core::error::{AppError, ErrorKind};
use worldcities_core::result::AppResult;
use worldcities_core::traits::Repository;
use worldcities_entity::{City, CityDraft};
use worldcities_query::{Materialized, QueryPlan, QuerySource};

use crate::query::PgQuerySource;

const COUNTRY_FK: &str = "cities_country_id_fkey";

/// Repository for city lookups, writes and paginated listing.
#[derive(Debug, Clone)]
pub struct CityRepository {
    pool: PgPool,
    source: PgQuerySource<City>,
}

impl CityRepository {
    /// Create a new city repository.
    pub fn new(pool: PgPool) -> Self {
        let source = PgQuerySource::new(pool.clone());
        Self { pool, source }
    }
}

#[async_trait]
impl Repository<City, CityDraft> for CityRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<City>> {
        sqlx::query_as::<_, City>("SELECT * FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find city by id", e))
    }

    async fn create(&self, draft: &CityDraft) -> AppResult<City> {
        sqlx::query_as::<_, City>(
            "INSERT INTO cities (name, lat, lon, country_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(draft.lat)
        .bind(draft.lon)
        .bind(draft.country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, draft, "Failed to create city"))
    }

    async fn update(&self, id: i32, draft: &CityDraft) -> AppResult<Option<City>> {
        sqlx::query_as::<_, City>(
            "UPDATE cities SET name = $2, lat = $3, lon = $4, country_id = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.lat)
        .bind(draft.lon)
        .bind(draft.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, draft, "Failed to update city"))
    }
}

#[async_trait]
impl QuerySource for CityRepository {
    type Record = City;

    async fn execute(&self, plan: &QueryPlan<City>) -> AppResult<Materialized<City>> {
        self.source.execute(plan).await
    }
}

fn map_write_error(e: sqlx::Error, draft: &CityDraft, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(COUNTRY_FK) => {
            AppError::validation(format!("Country {} does not exist", draft.country_id))
                .with_details(serde_json::json!({ "field": "countryId" }))
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
