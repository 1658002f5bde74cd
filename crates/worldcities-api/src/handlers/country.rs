//! Country handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use worldcities_core::error::AppError;
use worldcities_entity::{Country, CountryDraft};
use worldcities_query::{PagedResult, paginate};

use crate::dto::request::CountryRequest;
use crate::error::{ApiError, validation_error};
use crate::extractors::ListQuery;
use crate::state::AppState;

/// GET /api/countries
pub async fn list_countries(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<PagedResult<Country>>, ApiError> {
    let page = paginate(state.countries.as_ref(), params).await?;
    Ok(Json(page))
}

/// GET /api/countries/{id}
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Country>, ApiError> {
    let country = state
        .countries
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Country {id} not found")))?;
    Ok(Json(country))
}

/// POST /api/countries
pub async fn create_country(
    State(state): State<AppState>,
    Json(req): Json<CountryRequest>,
) -> Result<(StatusCode, Json<Country>), ApiError> {
    req.validate().map_err(validation_error)?;
    let country = state.countries.create(&CountryDraft::from(req)).await?;
    tracing::info!(country_id = country.id, "Country created");
    Ok((StatusCode::CREATED, Json(country)))
}

/// PUT /api/countries/{id}
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CountryRequest>,
) -> Result<Json<Country>, ApiError> {
    req.validate().map_err(validation_error)?;
    let country = state
        .countries
        .update(id, &CountryDraft::from(req))
        .await?
        .ok_or_else(|| AppError::not_found(format!("Country {id} not found")))?;
    Ok(Json(country))
}
