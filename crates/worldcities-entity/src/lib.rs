//! # worldcities-entity
//!
//! Domain entity models for WorldCities. Every struct in this crate
//! represents a database table row or its writable draft. Entities derive
//! `sqlx::FromRow` and register a static field table so they can be listed
//! through the paginated query engine.

pub mod city;
pub mod country;

pub use city::{City, CityDraft};
pub use country::{Country, CountryDraft};
