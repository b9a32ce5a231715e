//! Request-time errors that reach the HTTP error boundary.
//!
//! Anything a handler raises implements [`ClassifiedError`]. Errors that
//! carry an [`ErrorClassification`] get a curated status and an `errorCode`;
//! the rest fall back to the default status.

use thiserror::Error;

use crate::classification::ErrorClassification;

/// An error the HTTP boundary knows how to describe.
pub trait ClassifiedError: std::error::Error {
    /// Classification used for the status lookup and the `errorCode` field.
    fn classification(&self) -> Option<ErrorClassification> {
        None
    }

    /// Type name reported as `exceptionClass`.
    fn exception_class(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A classified application error raised by request handlers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServerError {
    /// Lookup key for status and `errorCode`.
    pub classification: ErrorClassification,
    /// Client-facing message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ServerError {
    /// Create an error carrying the classification's default message.
    pub fn new(classification: ErrorClassification) -> Self {
        Self::with_message(classification, classification.default_message())
    }

    /// Create an error with a specific message.
    pub fn with_message(classification: ErrorClassification, message: impl Into<String>) -> Self {
        Self {
            classification,
            message: message.into(),
            source: None,
        }
    }

    /// Create an error with a specific message and an underlying cause.
    pub fn with_source(
        classification: ErrorClassification,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            classification,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The addressed entity does not exist.
    pub fn entity_not_exists(message: impl Into<String>) -> Self {
        Self::with_message(ErrorClassification::EntityNotExists, message)
    }

    /// An entity with the same identity already exists.
    pub fn entity_already_exists(message: impl Into<String>) -> Self {
        Self::with_message(ErrorClassification::EntityAlreadyExists, message)
    }

    /// The caller lacks permission.
    pub fn insufficient_permission(message: impl Into<String>) -> Self {
        Self::with_message(ErrorClassification::InsufficientPermission, message)
    }

    /// The entity is locked.
    pub fn entity_locked(message: impl Into<String>) -> Self {
        Self::with_message(ErrorClassification::EntityLocked, message)
    }
}

impl ClassifiedError for ServerError {
    fn classification(&self) -> Option<ErrorClassification> {
        Some(self.classification)
    }
}

/// The request body could not be deserialized.
///
/// Carries no parser detail.
#[derive(Debug, Default, Error)]
#[error("{}", ErrorClassification::RestBodyNotReadable.default_message())]
pub struct MessageNotReadable;

impl ClassifiedError for MessageNotReadable {
    fn classification(&self) -> Option<ErrorClassification> {
        Some(ErrorClassification::RestBodyNotReadable)
    }
}

/// A multipart upload failed; holds the root cause's description.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct MultipartUploadFailed {
    /// Display text of the innermost cause.
    pub message: String,
}

impl MultipartUploadFailed {
    /// Wrap the innermost cause of a multipart failure.
    pub fn from_cause(cause: &(dyn std::error::Error + 'static)) -> Self {
        Self {
            message: cause.to_string(),
        }
    }
}

impl ClassifiedError for MultipartUploadFailed {
    fn classification(&self) -> Option<ErrorClassification> {
        Some(ErrorClassification::ArtifactUploadFailed)
    }
}

impl ClassifiedError for std::io::Error {}

impl ClassifiedError for serde_json::Error {}
