//! API integration tests.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use satcurve_api::{server::create_router, state::AppState};
use satcurve_core::table::SAMPLE_TSV;

fn server() -> TestServer {
    TestServer::new(create_router(AppState::new())).expect("router builds")
}

#[tokio::test]
async fn health_reports_ok() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_serves_the_form_page() {
    let server = server();
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Satcurve"));
    assert!(response.text().contains("log_equation"));
}

#[tokio::test]
async fn generate_then_preview_and_download() {
    let server = server();

    let response = server
        .post("/api/v1/charts")
        .json(&json!({
            "table": SAMPLE_TSV,
            "settings": { "models": "both", "extrapolation_ratio": 1.5 },
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["segments"], 3);
    assert!(body["acquisition_traces"].as_u64().unwrap() >= 6);
    assert!(body["warnings"].as_array().unwrap().is_empty());

    let preview = server.get("/api/v1/charts/acquisition/html").await;
    preview.assert_status_ok();
    assert!(preview.text().contains("<html"));
    assert!(preview.text().contains("Brand A / Category 1"));

    let download = server.get("/api/v1/charts/cpa/download").await;
    download.assert_status_ok();
    let disposition = download
        .headers()
        .get("content-disposition")
        .expect("attachment header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("cpa.html"));
}

#[tokio::test]
async fn download_before_generate_is_not_found() {
    let server = server();
    let response = server.get("/api/v1/charts/acquisition/html").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_metric_is_not_found() {
    let server = server();

    server
        .post("/api/v1/charts")
        .json(&json!({ "table": SAMPLE_TSV }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/v1/charts/conversions/html").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_columns_are_a_validation_error() {
    let server = server();

    let response = server
        .post("/api/v1/charts")
        .json(&json!({ "table": "segment\tlog_equation\nSeg1\ty = 1 * ln(x) + 2\n" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("x_min"));
    assert!(message.contains("x_max"));
}

#[tokio::test]
async fn out_of_range_ratio_is_a_validation_error() {
    let server = server();

    let response = server
        .post("/api/v1/charts")
        .json(&json!({
            "table": SAMPLE_TSV,
            "settings": { "extrapolation_ratio": 5.0 },
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn regeneration_replaces_the_retained_charts() {
    let server = server();

    server
        .post("/api/v1/charts")
        .json(&json!({ "table": SAMPLE_TSV }))
        .await
        .assert_status(StatusCode::CREATED);

    // A second run with a different title wins.
    server
        .post("/api/v1/charts")
        .json(&json!({
            "table": SAMPLE_TSV,
            "settings": { "title": "Second run" },
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let preview = server.get("/api/v1/charts/acquisition/html").await;
    preview.assert_status_ok();
    assert!(preview.text().contains("Second run"));
}

#[tokio::test]
async fn warnings_surface_skipped_rows() {
    let server = server();

    let response = server
        .post("/api/v1/charts")
        .json(&json!({
            "table": "segment\tx_min\tx_max\tlog_equation\nSeg1\tabc\t100\ty = 1 * ln(x) + 2\n",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["segments"], 0);
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("Seg1"));
}
