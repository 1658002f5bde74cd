//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use worldcities_entity::{CityDraft, CountryDraft};

/// Create or replace a city.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CityRequest {
    /// City name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Latitude in decimal degrees.
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    /// Longitude in decimal degrees.
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    /// Owning country.
    pub country_id: i32,
}

impl From<CityRequest> for CityDraft {
    fn from(req: CityRequest) -> Self {
        Self {
            name: req.name,
            lat: req.lat,
            lon: req.lon,
            country_id: req.country_id,
        }
    }
}

/// Create or replace a country.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountryRequest {
    /// Country name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    #[validate(length(equal = 2))]
    pub iso2: String,
    /// ISO 3166-1 alpha-3 code.
    #[validate(length(equal = 3))]
    pub iso3: String,
}

impl From<CountryRequest> for CountryDraft {
    fn from(req: CountryRequest) -> Self {
        Self {
            name: req.name,
            iso2: req.iso2,
            iso3: req.iso3,
        }
    }
}
