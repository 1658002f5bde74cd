//! Country domain entities.

pub mod model;

pub use model::{Country, CountryDraft};
