//! City entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use worldcities_query::{FieldDescriptor, FieldKind, FieldValue, Record};

/// A city with its coordinates and owning country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Primary key.
    pub id: i32,
    /// City name (UTF-8, not transliterated).
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Owning country.
    pub country_id: i32,
}

impl Record for City {
    const ENTITY: &'static str = "City";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        static FIELDS: [FieldDescriptor<City>; 5] = [
            FieldDescriptor::new("id", "id", FieldKind::Integer, |c: &City| {
                FieldValue::Integer(i64::from(c.id))
            }),
            FieldDescriptor::new("name", "name", FieldKind::Text, |c: &City| {
                FieldValue::Text(&c.name)
            }),
            FieldDescriptor::new("lat", "lat", FieldKind::Float, |c: &City| {
                FieldValue::Float(c.lat)
            }),
            FieldDescriptor::new("lon", "lon", FieldKind::Float, |c: &City| {
                FieldValue::Float(c.lon)
            }),
            FieldDescriptor::new("countryId", "country_id", FieldKind::Integer, |c: &City| {
                FieldValue::Integer(i64::from(c.country_id))
            }),
        ];
        &FIELDS
    }
}

/// Writable city fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDraft {
    /// City name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Owning country.
    pub country_id: i32,
}

impl CityDraft {
    /// Materialize the draft under a primary key.
    pub fn into_city(self, id: i32) -> City {
        City {
            id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            country_id: self.country_id,
        }
    }
}
