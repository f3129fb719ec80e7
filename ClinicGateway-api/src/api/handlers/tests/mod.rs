// Handler tests run the full router against in-memory storage
mod patients_test;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use clinic_gateway_data::models::{Patient, Provider};
use clinic_gateway_data::repository::InMemoryStorage;

use crate::api::{create_application, AppState};

pub(super) fn app_with(storage: InMemoryStorage) -> Router {
    create_application(AppState::from_storage(storage))
}

pub(super) fn patient(id: i64, first: &str, last: &str, dob: (i32, u32, u32)) -> Patient {
    Patient {
        patient_id: id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2),
    }
}

pub(super) fn provider(first: &str, last: &str, specialty: &str) -> Provider {
    Provider {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        provider_specialty: Some(specialty.to_string()),
    }
}

/// Send a GET and return status, content type and raw body
pub(super) async fn get(app: Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::ORIGIN, "http://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, body.to_vec())
}

pub(super) async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, content_type, body) = get(app, uri).await;
    assert!(content_type.starts_with("application/json"), "unexpected content type {}", content_type);
    (status, serde_json::from_slice(&body).unwrap())
}
