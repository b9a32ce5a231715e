//! Integration tests for the HTTP error boundary.

mod helpers;

use std::collections::HashMap;

use http::StatusCode;
use serde_json::Value;

use rollout_core::ErrorClassification;
use rollout_core::config::AppConfig;

const BOUNDARY: &str = "multipart/form-data; boundary=XBOUNDARY";

#[tokio::test]
async fn test_entity_not_exists_is_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/targets/abc", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Target abc does not exist");
    assert_eq!(
        response.body["exceptionClass"],
        "rollout_core::exception::ServerError"
    );
    assert_eq!(
        response.body["errorCode"],
        ErrorClassification::EntityNotExists.key()
    );
}

#[tokio::test]
async fn test_classified_scenarios() {
    let app = helpers::TestApp::new();

    let cases = [
        ("duplicate", StatusCode::CONFLICT),
        ("forbidden", StatusCode::FORBIDDEN),
        ("locked", StatusCode::LOCKED),
    ];
    for (id, status) in cases {
        let response = app
            .request("GET", &format!("/api/targets/{id}"), None, None)
            .await;
        assert_eq!(response.status, status, "target {id}");
        assert!(response.body["errorCode"].is_string());
    }
}

#[tokio::test]
async fn test_unclassified_error_is_500_without_code() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/storage", None, None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], Value::Null);
    assert_eq!(response.body["errorCode"], Value::Null);
    assert!(response.body.get("errorCode").is_some());
}

#[tokio::test]
async fn test_malformed_json_is_400_without_parser_detail() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/targets",
            Some("application/json"),
            Some("{\"controllerId\": "),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "The given request body is not well formed"
    );
    assert_eq!(
        response.body["exceptionClass"],
        "rollout_core::exception::MessageNotReadable"
    );
    assert_eq!(
        response.body["errorCode"],
        ErrorClassification::RestBodyNotReadable.key()
    );
}

#[tokio::test]
async fn test_json_of_wrong_shape_is_400() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/targets",
            Some("application/json"),
            Some("{\"name\": 7}"),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["errorCode"],
        ErrorClassification::RestBodyNotReadable.key()
    );
}

#[tokio::test]
async fn test_json_without_content_type_keeps_415() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/targets", None, Some("{\"controllerId\": \"dev-01\"}"))
        .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.body["message"], Value::Null);
    assert_eq!(response.body["errorCode"], Value::Null);
    assert!(
        response.body["exceptionClass"]
            .as_str()
            .is_some_and(|class| class.contains("JsonRejection"))
    );
}

#[tokio::test]
async fn test_well_formed_json_passes() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/targets",
            Some("application/json"),
            Some("{\"controllerId\": \"dev-01\"}"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["controllerId"], "dev-01");
}

#[tokio::test]
async fn test_multipart_without_boundary_is_400() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/artifacts", Some("multipart/form-data"), Some(""))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["exceptionClass"],
        "rollout_core::exception::MultipartUploadFailed"
    );
    assert_eq!(
        response.body["errorCode"],
        ErrorClassification::ArtifactUploadFailed.key()
    );
}

#[tokio::test]
async fn test_truncated_multipart_is_400() {
    let app = helpers::TestApp::new();
    let body = "--XBOUNDARY\r\n\
                Content-Disposition: form-data; name=\"file\"; filename=\"fw.bin\"\r\n\
                \r\n\
                partial";

    let response = app
        .request("POST", "/api/artifacts", Some(BOUNDARY), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["exceptionClass"],
        "rollout_core::exception::MultipartUploadFailed"
    );
}

#[tokio::test]
async fn test_complete_multipart_passes() {
    let app = helpers::TestApp::new();
    let body = "--XBOUNDARY\r\n\
                Content-Disposition: form-data; name=\"file\"; filename=\"fw.bin\"\r\n\
                \r\n\
                firmware\r\n\
                --XBOUNDARY--\r\n";

    let response = app
        .request("POST", "/api/artifacts", Some(BOUNDARY), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parts"], 1);
}

#[tokio::test]
async fn test_configured_override_applies() {
    let mut config = AppConfig::default();
    config.errors.overrides = HashMap::from([(ErrorClassification::EntityLocked, 409)]);
    let app = helpers::TestApp::with_config(config);

    let response = app.request("GET", "/api/targets/locked", None, None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}
