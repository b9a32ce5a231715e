//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::Json;
use http::{Request, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceExt;

use rollout_api::extractors::{JsonBody, MultipartBody};
use rollout_api::router::build_router;
use rollout_api::{ApiError, AppState};
use rollout_core::config::AppConfig;
use rollout_core::exception::ServerError;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Parsed test response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body, `Null` when empty
    pub body: Value,
}

impl TestApp {
    /// Create a test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("Failed to build app state");
        Self {
            router: build_router(state, test_routes()),
        }
    }

    /// Send a request and parse the JSON response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder
            .body(Body::from(body.unwrap_or_default().to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, body }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewTarget {
    controller_id: String,
}

fn test_routes() -> Router<AppState> {
    Router::new()
        .route("/targets", post(create_target))
        .route("/targets/{id}", get(get_target))
        .route("/artifacts", post(upload_artifact))
        .route("/storage", get(storage_failure))
}

async fn create_target(JsonBody(target): JsonBody<NewTarget>) -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({ "controllerId": target.controller_id })))
}

async fn get_target(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let error = match id.as_str() {
        "duplicate" => ServerError::entity_already_exists(format!("Target {id} already exists")),
        "forbidden" => ServerError::insufficient_permission("Missing READ_TARGET"),
        "locked" => ServerError::entity_locked(format!("Target {id} is locked")),
        _ => ServerError::entity_not_exists(format!("Target {id} does not exist")),
    };
    Err(error.into())
}

async fn upload_artifact(
    MultipartBody(mut multipart): MultipartBody,
) -> Result<Json<Value>, ApiError> {
    let mut parts = 0;
    while let Some(field) = multipart.next_field().await? {
        field.bytes().await?;
        parts += 1;
    }
    Ok(Json(json!({ "parts": parts })))
}

async fn storage_failure() -> Result<Json<Value>, ApiError> {
    Err(std::io::Error::other("storage backend unreachable").into())
}
