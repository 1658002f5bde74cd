//! HTTP tests for the country endpoints and the health probe.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, send_json, test_app};

#[tokio::test]
async fn test_list_countries_for_dropdown() {
    let (status, body) = get(
        test_app(),
        "/api/countries?pageSize=9999&sortColumn=name&sortOrder=asc",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["France", "Italy", "Norway"]);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn test_filter_countries_by_iso2() {
    let (status, body) = get(test_app(), "/api/countries?filterColumn=ISO2&filterQuery=n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["data"][0]["iso3"], "NOR");
}

#[tokio::test]
async fn test_city_only_fields_rejected_on_countries() {
    let (status, body) = get(test_app(), "/api/countries?sortColumn=lat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "lat");
}

#[tokio::test]
async fn test_country_crud() {
    let app = test_app();
    let (status, created) = send_json(
        app.clone(),
        "POST",
        "/api/countries",
        json!({ "name": "Sweden", "iso2": "SE", "iso3": "SWE" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, updated) = send_json(
        app.clone(),
        "PUT",
        "/api/countries/4",
        json!({ "name": "Kingdom of Sweden", "iso2": "SE", "iso3": "SWE" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Kingdom of Sweden");

    let (status, fetched) = get(app, "/api/countries/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["iso2"], "SE");
}

#[tokio::test]
async fn test_country_iso_codes_validated() {
    let (status, body) = send_json(
        test_app(),
        "POST",
        "/api/countries",
        json!({ "name": "Sweden", "iso2": "SWE", "iso3": "SE" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["fields"], json!(["iso2", "iso3"]));
}

#[tokio::test]
async fn test_missing_country_is_not_found() {
    let (status, body) = get(test_app(), "/api/countries/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Country 42 not found");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(test_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
