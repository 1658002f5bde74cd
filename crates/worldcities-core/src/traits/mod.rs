//! Core trait definitions shared across WorldCities crates.

pub mod repository;

pub use repository::Repository;
