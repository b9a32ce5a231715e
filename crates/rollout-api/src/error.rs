//! The error type returned by handlers and extractors.
//!
//! `ApiError` does not render itself. Its response is a 500 placeholder
//! carrying the error in a [`RaisedError`] extension, which the exception
//! middleware swaps for the translated response once it knows the request
//! URL. Routers built by [`crate::router::build_router`] always install that
//! middleware.

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use rollout_core::exception::{ClassifiedError, ServerError};

/// An error raised while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A classified application error.
    #[error(transparent)]
    Server(#[from] ServerError),
    /// Any other error; answered with the default status.
    #[error("{0}")]
    Unclassified(Box<dyn ClassifiedError + Send + Sync>),
    /// The JSON request body is not valid JSON or does not fit the target type.
    #[error(transparent)]
    MalformedBody(JsonRejection),
    /// The JSON request was rejected before deserialization (content type,
    /// body size, body read); answered with the rejection's own status.
    #[error(transparent)]
    JsonRejected(JsonRejection),
    /// The request is not a valid multipart request.
    #[error(transparent)]
    MultipartRejected(#[from] MultipartRejection),
    /// Reading a multipart field failed.
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl ApiError {
    /// Wrap an error without a classification.
    pub fn unclassified(error: impl ClassifiedError + Send + Sync + 'static) -> Self {
        Self::Unclassified(Box::new(error))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                Self::MalformedBody(rejection)
            }
            _ => Self::JsonRejected(rejection),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::unclassified(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::unclassified(err)
    }
}

/// Response extension holding an error awaiting translation.
#[derive(Debug, Clone)]
pub struct RaisedError(pub Arc<ApiError>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(RaisedError(Arc::new(self)));
        response
    }
}
