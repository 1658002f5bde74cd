//! Application state shared across all handlers and middleware.

use std::fmt;
use std::sync::Arc;

use worldcities_core::config::AppConfig;
use worldcities_core::traits::Repository;
use worldcities_entity::{City, CityDraft, Country, CountryDraft};
use worldcities_query::{QuerySource, Record};

/// Storage for one entity type: keyed reads and writes plus the paginated
/// query source backing its list endpoint.
pub trait EntityStore<E, D>: Repository<E, D> + QuerySource<Record = E>
where
    E: Record,
    D: Send + Sync + 'static,
{
}

impl<T, E, D> EntityStore<E, D> for T
where
    T: Repository<E, D> + QuerySource<Record = E>,
    E: Record,
    D: Send + Sync + 'static,
{
}

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// City storage.
    pub cities: Arc<dyn EntityStore<City, CityDraft>>,
    /// Country storage.
    pub countries: Arc<dyn EntityStore<Country, CountryDraft>>,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(
        config: AppConfig,
        cities: Arc<dyn EntityStore<City, CityDraft>>,
        countries: Arc<dyn EntityStore<Country, CountryDraft>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            cities,
            countries,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
