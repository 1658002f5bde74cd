//! City handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use worldcities_core::error::AppError;
use worldcities_entity::{City, CityDraft};
use worldcities_query::{PagedResult, paginate};

use crate::dto::request::CityRequest;
use crate::error::{ApiError, validation_error};
use crate::extractors::ListQuery;
use crate::state::AppState;

/// GET /api/cities
pub async fn list_cities(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<PagedResult<City>>, ApiError> {
    let page = paginate(state.cities.as_ref(), params).await?;
    Ok(Json(page))
}

/// GET /api/cities/{id}
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<City>, ApiError> {
    let city = state
        .cities
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("City {id} not found")))?;
    Ok(Json(city))
}

/// POST /api/cities
pub async fn create_city(
    State(state): State<AppState>,
    Json(req): Json<CityRequest>,
) -> Result<(StatusCode, Json<City>), ApiError> {
    req.validate().map_err(validation_error)?;
    let city = state.cities.create(&CityDraft::from(req)).await?;
    tracing::info!(city_id = city.id, "City created");
    Ok((StatusCode::CREATED, Json(city)))
}

/// PUT /api/cities/{id}
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CityRequest>,
) -> Result<Json<City>, ApiError> {
    req.validate().map_err(validation_error)?;
    let city = state
        .cities
        .update(id, &CityDraft::from(req))
        .await?
        .ok_or_else(|| AppError::not_found(format!("City {id} not found")))?;
    Ok(Json(city))
}
