//! Response DTOs.

use serde::{Deserialize, Serialize};

use rollout_core::exception::ClassifiedError;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Error body returned for every failed request.
///
/// Absent fields serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// Display text of a classified error; absent when empty or unclassified.
    pub message: Option<String>,
    /// Type name of the error the body was built from.
    pub exception_class: String,
    /// Classification key; present only for classified errors.
    pub error_code: Option<String>,
}

impl ErrorInfo {
    /// Describe an error for the client.
    ///
    /// Only classified errors expose their message.
    pub fn from_error<E: ClassifiedError + ?Sized>(error: &E) -> Self {
        let classification = error.classification();
        let message = classification
            .map(|_| error.to_string())
            .filter(|m| !m.is_empty());
        Self {
            message,
            exception_class: error.exception_class().to_string(),
            error_code: classification.map(|c| c.key().to_string()),
        }
    }

    /// Describe an error that is not a [`ClassifiedError`]; never carries a
    /// message or code.
    pub fn unclassified<E: ?Sized>() -> Self {
        Self {
            message: None,
            exception_class: std::any::type_name::<E>().to_string(),
            error_code: None,
        }
    }
}
