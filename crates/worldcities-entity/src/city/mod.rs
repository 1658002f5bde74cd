//! City domain entities.

pub mod model;

pub use model::{City, CityDraft};
