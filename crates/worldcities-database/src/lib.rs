//! # worldcities-database
//!
//! PostgreSQL connection management, migrations, the SQL push-down query
//! source and the concrete city/country repositories.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod table;

pub use connection::DatabasePool;
pub use query::PgQuerySource;
pub use repositories::{CityRepository, CountryRepository};
pub use table::TableRecord;
