use std::sync::Arc;

use api_gateway::{routes::build_router, state::AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{FixedOffset, TimeZone, Utc};
use domain::{FixedClock, UuidProvider};
use persistence::InMemoryCompanyRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

const UNKNOWN_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

fn app() -> Router {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 13, 30, 0).unwrap());
    let state = AppState::new(
        Arc::new(InMemoryCompanyRepository::new()),
        Arc::new(UuidProvider),
        Arc::new(clock),
        FixedOffset::west_opt(3 * 3600).unwrap(),
    );
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_root_greets() {
    let (status, body) = send(&app(), get("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello API" }));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_company() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/companies",
            json!({ "name": "  Acme Corp  ", "address": "Rua das Flores, 123 - São Paulo/SP" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Acme Corp");
    assert_eq!(body["address"], "Rua das Flores, 123 - São Paulo/SP");
    assert_eq!(body["createdAt"], "2024-01-15T13:30:00.000Z");
    assert_eq!(body["createdAtFormatted"], "15/01/2024 às 10:30");
    assert_eq!(body["id"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_create_company_sanitizes_values() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/companies",
            json!({ "name": "O'Reilly Media", "address": "Rua <Principal>, 10" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "O&#x27Reilly Media");
    assert_eq!(body["address"], "Rua &ltPrincipal&gt, 10");
}

#[tokio::test]
async fn test_create_company_reports_every_invalid_field() {
    let (status, body) = send(
        &app(),
        post_json("/api/companies", json!({ "name": "", "address": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["code"], "VALIDATION_ERRORS");
    assert_eq!(body["message"], "Validation failed for fields: name, address");
    assert_eq!(body["path"], "/api/companies");
    assert_eq!(body["method"], "POST");

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[1]["field"], "address");
    assert_eq!(errors[0]["code"], "EmptyStringError");
}

#[tokio::test]
async fn test_create_company_with_missing_fields() {
    let (status, body) = send(&app(), post_json("/api/companies", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e["code"] == "StringValidationError"));
}

#[tokio::test]
async fn test_create_company_rejects_xss() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/companies",
            json!({ "name": "<script>alert(1)</script>Acme", "address": "Rua das Flores, 123" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    assert_eq!(body["errors"][0]["field"], "name");
    assert_eq!(body["errors"][0]["code"], "XssDetectedError");
}

#[tokio::test]
async fn test_create_company_with_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/companies")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_company() {
    let (status, body) = send(&app(), get(&format!("/api/companies/{}", UNKNOWN_ID))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(
        body["message"],
        format!("Company with ID {} not found", UNKNOWN_ID)
    );
    assert_eq!(body["context"]["entityId"], UNKNOWN_ID);
    assert_eq!(body["method"], "GET");
}

#[tokio::test]
async fn test_get_company_with_malformed_id() {
    let (status, body) = send(&app(), get("/api/companies/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Company ID is required and must be a valid UUID");
    assert_eq!(body["path"], "/api/companies/not-a-uuid");
}

#[tokio::test]
async fn test_create_then_fetch_and_list() {
    let app = app();

    let (_, first) = send(
        &app,
        post_json(
            "/api/companies",
            json!({ "name": "First Co", "address": "Rua A, 100" }),
        ),
    )
    .await;
    let (_, second) = send(
        &app,
        post_json(
            "/api/companies",
            json!({ "name": "Second Co", "address": "Rua B, 200" }),
        ),
    )
    .await;

    let id = first["id"].as_str().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/companies/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);

    let (status, listed) = send(&app, get("/api/companies")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["companies"], json!([first, second]));
}

#[tokio::test]
async fn test_metrics_exposed() {
    let app = app();
    send(&app, get("/api/companies")).await;

    let response = app.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("companies_use_cases_total"));
}
