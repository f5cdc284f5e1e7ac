use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use diseasenet_core::models::prediction::FALLBACK_TREATMENT;
use diseasenet_core::models::report::ReportFormat;
use diseasenet_model::DiagnosisEngine;
use diseasenet_server::state::AppState;

fn test_app() -> Router {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/model.json");
    let engine = DiagnosisEngine::load(&path).unwrap();
    diseasenet_server::app(AppState::new(Arc::new(engine), ReportFormat::Pdf))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

#[tokio::test]
async fn health_reports_model_shape() {
    let resp = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "ok", "symptoms": 131, "classes": 41 })
    );
}

#[tokio::test]
async fn symptoms_are_listed_in_feature_order() {
    let resp = test_app().oneshot(get("/symptoms")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 131);
    assert_eq!(entries[0], json!({ "id": "itching", "label": "Itching" }));
    assert_eq!(entries[1], json!({ "id": "skin_rash", "label": "Skin rash" }));
}

#[tokio::test]
async fn predict_returns_disease_and_treatments() {
    let req = post_json(
        "/predict",
        json!({
            "name": "Jane Doe",
            "age": "34",
            "gender": "Female",
            "symptoms": ["itching", "skin_rash"]
        }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["predicted_disease"], "Fungal infection");
    assert_eq!(
        body["treatments"],
        json!(["Clotrimazole", "Fluconazole", "Ketoconazole"])
    );
    assert_eq!(body["patient"]["name"], "Jane Doe");
    assert_eq!(body["symptoms"], json!(["itching", "skin_rash"]));
}

#[tokio::test]
async fn predict_ignores_unknown_symptoms() {
    let req = post_json(
        "/predict",
        json!({ "symptoms": ["high_fever", "chills", "not_a_symptom"] }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["predicted_disease"], "Malaria");
    assert_eq!(
        body["symptoms"],
        json!(["high_fever", "chills", "not_a_symptom"])
    );
}

#[tokio::test]
async fn report_defaults_to_pdf_download() {
    let req = post_json(
        "/report",
        json!({
            "patient": { "name": "Jane Doe", "age": "34", "gender": "Female" },
            "symptoms": ["itching", "skin_rash"],
            "predicted_disease": "Fungal infection",
            "treatments": ["Clotrimazole", "Fluconazole", "Ketoconazole"]
        }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane_Doe_Disease_Report.pdf\""
    );
    assert!(body_bytes(resp).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn report_honours_requested_format() {
    let req = post_json(
        "/report",
        json!({
            "patient": { "name": "Sam" },
            "symptoms": [],
            "predicted_disease": "Unknown Disease XYZ",
            "treatments": [FALLBACK_TREATMENT],
            "format": "docx"
        }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        ReportFormat::Docx.content_type()
    );
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Sam_Disease_Report.docx\""
    );
    assert!(body_bytes(resp).await.starts_with(b"PK"));
}

#[tokio::test]
async fn report_with_malformed_field_is_bad_request() {
    let req = post_json(
        "/report",
        json!({
            "patient": { "name": "Jane\nDoe" },
            "symptoms": ["itching"],
            "predicted_disease": "Fungal infection",
            "treatments": ["Clotrimazole"]
        }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("patient name"));
}

#[tokio::test]
async fn report_without_treatments_is_bad_request() {
    let req = post_json(
        "/report",
        json!({
            "predicted_disease": "Fungal infection",
            "treatments": []
        }),
    );
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"symptoms\": ["))
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = test_app().oneshot(get("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
