use axum::http::StatusCode;
use serde_json::json;

use clinic_gateway_data::repository::InMemoryStorage;

use super::{app_with, get, get_json, patient};

fn seeded() -> InMemoryStorage {
    InMemoryStorage::new().with_patients(vec![
        patient(1, "Ada", "Lovelace", (1815, 12, 10)),
        patient(2, "Grace", "Hopper", (1906, 12, 9)),
        patient(3, "Ada", "Yonath", (1939, 6, 22)),
    ])
}

#[tokio::test]
async fn test_get_patients_returns_every_row() {
    let (status, body) = get_json(app_with(seeded()), "/patients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "patient_id": 1, "first_name": "Ada", "last_name": "Lovelace", "date_of_birth": "1815-12-10" },
            { "patient_id": 2, "first_name": "Grace", "last_name": "Hopper", "date_of_birth": "1906-12-09" },
            { "patient_id": 3, "first_name": "Ada", "last_name": "Yonath", "date_of_birth": "1939-06-22" }
        ])
    );
}

#[tokio::test]
async fn test_get_patients_passes_null_columns_through() {
    let mut unknown = patient(4, "Grace", "Hopper", (1906, 12, 9));
    unknown.last_name = None;
    unknown.date_of_birth = None;

    let (status, body) = get_json(app_with(InMemoryStorage::new().with_patient(unknown)), "/patients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "patient_id": 4, "first_name": "Grace", "last_name": null, "date_of_birth": null }])
    );
}

#[tokio::test]
async fn test_get_patients_empty_table_is_ok() {
    let (status, body) = get_json(app_with(InMemoryStorage::new()), "/patients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_patients_database_failure() {
    let (status, body) = get_json(app_with(seeded().with_failure()), "/patients").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database query failed" }));
}

#[tokio::test]
async fn test_search_patients_by_first_name() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search?first_name=Ada").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["patient_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_search_patients_decodes_query_value() {
    let storage = InMemoryStorage::new().with_patient(patient(9, "Mary Ann", "Evans", (1819, 11, 22)));

    let (status, body) = get_json(app_with(storage), "/patients/search?first_name=Mary%20Ann").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["last_name"], "Evans");
}

#[tokio::test]
async fn test_search_patients_requires_first_name() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "First name is required" }));
}

#[tokio::test]
async fn test_search_patients_empty_first_name_is_missing() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search?first_name=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "First name is required" }));
}

#[tokio::test]
async fn test_search_patients_ignores_unrelated_params() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search?last_name=Hopper").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "First name is required");
}

#[tokio::test]
async fn test_search_patients_repeated_first_name_is_json_error() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search?first_name=Ada&first_name=Grace").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("first_name"), "unexpected message {}", message);
}

#[tokio::test]
async fn test_search_patients_no_match() {
    let (status, body) = get_json(app_with(seeded()), "/patients/search?first_name=Zzzznomatch").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No patients found with the first name: Zzzznomatch" }));
}

#[tokio::test]
async fn test_search_patients_validation_precedes_query() {
    // A missing parameter is reported even when the database is down
    let (status, _) = get_json(app_with(seeded().with_failure()), "/patients/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(app_with(seeded().with_failure()), "/patients/search?first_name=Ada").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database query failed" }));
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let storage = seeded();

    let (_, _, first) = get(app_with(storage.clone()), "/patients").await;
    let (_, _, second) = get(app_with(storage), "/patients").await;

    assert_eq!(first, second);
}
