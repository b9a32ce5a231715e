//! Translation of raised errors into `(status, ErrorInfo)` responses.

use std::sync::Arc;

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use rollout_core::exception::{ClassifiedError, MessageNotReadable, MultipartUploadFailed};
use rollout_core::status::StatusMapping;

use crate::dto::response::ErrorInfo;
use crate::error::ApiError;
use crate::exception::chain::root_cause;

/// A translated error, ready to be written to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body.
    pub body: ErrorInfo,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Turns errors raised during request handling into client responses.
///
/// Every operation is infallible and touches no shared mutable state.
#[derive(Debug, Clone)]
pub struct ErrorTranslator {
    mapping: Arc<StatusMapping>,
}

impl ErrorTranslator {
    /// Create a translator over a fully built status table.
    pub fn new(mapping: Arc<StatusMapping>) -> Self {
        Self { mapping }
    }

    /// The status table in use.
    pub fn mapping(&self) -> &StatusMapping {
        &self.mapping
    }

    /// Route an [`ApiError`] to the matching handler.
    pub fn dispatch(&self, uri: &Uri, error: &ApiError) -> ErrorResponse {
        match error {
            ApiError::Server(e) => self.handle_classified_error(uri, e),
            ApiError::Unclassified(e) => self.handle_classified_error(uri, &**e),
            ApiError::MalformedBody(e) => self.handle_malformed_body(uri, e),
            ApiError::JsonRejected(e) => self.handle_rejection(uri, e.status(), e),
            ApiError::MultipartRejected(e) => self.handle_multipart_failure(uri, e),
            ApiError::Multipart(e) => self.handle_multipart_failure(uri, e),
        }
    }

    /// Status from the table (default when unclassified or unmapped) and a
    /// body describing the error itself.
    pub fn handle_classified_error<E>(&self, uri: &Uri, error: &E) -> ErrorResponse
    where
        E: ClassifiedError + ?Sized,
    {
        log_request(uri, error.exception_class());
        ErrorResponse {
            status: self.mapping.status_or_default(error.classification()),
            body: ErrorInfo::from_error(error),
        }
    }

    /// Always 400. The body describes [`MessageNotReadable`], never the
    /// parser error.
    pub fn handle_malformed_body<E>(&self, uri: &Uri, _error: &E) -> ErrorResponse
    where
        E: std::error::Error + ?Sized,
    {
        log_request(uri, std::any::type_name::<E>());
        ErrorResponse {
            status: StatusCode::BAD_REQUEST,
            body: ErrorInfo::from_error(&MessageNotReadable),
        }
    }

    /// A request the framework refused before it reached the handler. Keeps
    /// the framework's status; the body names the rejection type only.
    pub fn handle_rejection<E>(&self, uri: &Uri, status: StatusCode, _error: &E) -> ErrorResponse
    where
        E: std::error::Error + ?Sized,
    {
        log_request(uri, std::any::type_name::<E>());
        ErrorResponse {
            status,
            body: ErrorInfo::unclassified::<E>(),
        }
    }

    /// Always 400. The body describes the innermost cause of `error`,
    /// wrapped in [`MultipartUploadFailed`].
    pub fn handle_multipart_failure<E>(&self, uri: &Uri, error: &E) -> ErrorResponse
    where
        E: std::error::Error + 'static,
    {
        log_request(uri, std::any::type_name::<E>());
        let cause = MultipartUploadFailed::from_cause(root_cause(error));
        ErrorResponse {
            status: StatusCode::BAD_REQUEST,
            body: ErrorInfo::from_error(&cause),
        }
    }
}

/// Never logs the error message.
fn log_request(uri: &Uri, exception_class: &str) {
    tracing::debug!(
        exception = exception_class,
        url = %uri,
        "Handling exception of request"
    );
}
