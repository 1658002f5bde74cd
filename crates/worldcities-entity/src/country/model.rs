//! Country entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use worldcities_query::{FieldDescriptor, FieldKind, FieldValue, Record};

/// A country with its ISO 3166 codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Primary key.
    pub id: i32,
    /// Country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso2: String,
    /// ISO 3166-1 alpha-3 code.
    pub iso3: String,
}

impl Record for Country {
    const ENTITY: &'static str = "Country";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        static FIELDS: [FieldDescriptor<Country>; 4] = [
            FieldDescriptor::new("id", "id", FieldKind::Integer, |c: &Country| {
                FieldValue::Integer(i64::from(c.id))
            }),
            FieldDescriptor::new("name", "name", FieldKind::Text, |c: &Country| {
                FieldValue::Text(&c.name)
            }),
            FieldDescriptor::new("iso2", "iso2", FieldKind::Text, |c: &Country| {
                FieldValue::Text(&c.iso2)
            }),
            FieldDescriptor::new("iso3", "iso3", FieldKind::Text, |c: &Country| {
                FieldValue::Text(&c.iso3)
            }),
        ];
        &FIELDS
    }
}

/// Writable country fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDraft {
    /// Country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso2: String,
    /// ISO 3166-1 alpha-3 code.
    pub iso3: String,
}

impl CountryDraft {
    /// Materialize the draft under a primary key.
    pub fn into_country(self, id: i32) -> Country {
        Country {
            id,
            name: self.name,
            iso2: self.iso2,
            iso3: self.iso3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldcities_query::{MemorySource, QueryParams, paginate, resolve};

    fn country(id: i32, name: &str, iso2: &str, iso3: &str) -> Country {
        Country {
            id,
            name: name.to_string(),
            iso2: iso2.to_string(),
            iso3: iso3.to_string(),
        }
    }

    #[test]
    fn test_iso_fields_resolve() {
        assert_eq!(resolve::<Country>("ISO2").unwrap().name(), "iso2");
        assert_eq!(resolve::<Country>("Iso3").unwrap().name(), "iso3");
        assert!(resolve::<Country>("lat").is_err());
    }

    #[tokio::test]
    async fn test_country_dropdown_query() {
        let source = MemorySource::new(vec![
            country(1, "Norway", "NO", "NOR"),
            country(2, "Italy", "IT", "ITA"),
            country(3, "France", "FR", "FRA"),
        ]);
        let params = QueryParams::page(0, 9999).sorted_by("name", Some("asc"));
        let page = paginate(&source, params).await.unwrap();
        let names: Vec<&str> = page.data().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France", "Italy", "Norway"]);
        assert_eq!(page.total_pages(), 1);
    }

    #[tokio::test]
    async fn test_filter_by_iso3() {
        let source = MemorySource::new(vec![
            country(1, "Norway", "NO", "NOR"),
            country(2, "North Macedonia", "MK", "MKD"),
        ]);
        let params = QueryParams::page(0, 10).filtered_by("iso3", "nor");
        let page = paginate(&source, params).await.unwrap();
        assert_eq!(page.total_count(), 1);
        assert_eq!(page.data()[0].iso2, "NO");
    }
}
