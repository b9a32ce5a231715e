//! Classification-to-status lookup table.
//!
//! Built once at startup and shared read-only through `Arc`.

use std::collections::HashMap;

use axum::http::StatusCode;

use crate::classification::ErrorClassification;
use crate::config::errors::ErrorMappingConfig;
use crate::error::AppError;
use crate::result::AppResult;

/// Status returned for unclassified and unmapped errors.
pub const DEFAULT_RESPONSE_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

const STANDARD_STATUSES: &[(ErrorClassification, StatusCode)] = &[
    (ErrorClassification::EntityNotExists, StatusCode::NOT_FOUND),
    (ErrorClassification::EntityAlreadyExists, StatusCode::CONFLICT),
    (ErrorClassification::EntityReadOnly, StatusCode::FORBIDDEN),
    (ErrorClassification::SortParamInvalidDirection, StatusCode::BAD_REQUEST),
    (ErrorClassification::SortParamInvalidField, StatusCode::BAD_REQUEST),
    (ErrorClassification::SortParamSyntax, StatusCode::BAD_REQUEST),
    (ErrorClassification::RsqlParamInvalidField, StatusCode::BAD_REQUEST),
    (ErrorClassification::RsqlSearchParamSyntax, StatusCode::BAD_REQUEST),
    (ErrorClassification::InsufficientPermission, StatusCode::FORBIDDEN),
    (ErrorClassification::ArtifactUploadFailed, StatusCode::INTERNAL_SERVER_ERROR),
    (ErrorClassification::ArtifactUploadFailedSha1Match, StatusCode::BAD_REQUEST),
    (ErrorClassification::ArtifactUploadFailedMd5Match, StatusCode::BAD_REQUEST),
    (ErrorClassification::ArtifactDeleteFailed, StatusCode::INTERNAL_SERVER_ERROR),
    (ErrorClassification::ArtifactLoadFailed, StatusCode::INTERNAL_SERVER_ERROR),
    (ErrorClassification::ActionStatusTooManyEntries, StatusCode::FORBIDDEN),
    (ErrorClassification::AttributesTooManyEntries, StatusCode::FORBIDDEN),
    (ErrorClassification::ActionNotCancelable, StatusCode::METHOD_NOT_ALLOWED),
    (ErrorClassification::ActionNotForceQuittable, StatusCode::METHOD_NOT_ALLOWED),
    (ErrorClassification::DsCreationFailedMissingModule, StatusCode::BAD_REQUEST),
    (ErrorClassification::DsModuleUnsupported, StatusCode::BAD_REQUEST),
    (ErrorClassification::DsTypeUndefined, StatusCode::BAD_REQUEST),
    (ErrorClassification::TenantNotExists, StatusCode::BAD_REQUEST),
    (ErrorClassification::EntityLocked, StatusCode::LOCKED),
    (ErrorClassification::RolloutIllegalState, StatusCode::BAD_REQUEST),
    (ErrorClassification::ConfigurationValueInvalid, StatusCode::BAD_REQUEST),
    (ErrorClassification::ConfigurationKeyInvalid, StatusCode::BAD_REQUEST),
    (ErrorClassification::InvalidTargetAddress, StatusCode::BAD_REQUEST),
];

/// Immutable mapping from [`ErrorClassification`] to HTTP status.
///
/// Lookups never mutate the table. Classifications without an entry resolve
/// to [`StatusMapping::default_status`].
#[derive(Debug, Clone)]
pub struct StatusMapping {
    table: HashMap<ErrorClassification, StatusCode>,
    default_status: StatusCode,
}

impl StatusMapping {
    /// The built-in table with a 500 default.
    pub fn standard() -> Self {
        Self {
            table: STANDARD_STATUSES.iter().copied().collect(),
            default_status: DEFAULT_RESPONSE_STATUS,
        }
    }

    /// The built-in table with configured overrides and default applied.
    ///
    /// Every configured status must be a 4xx or 5xx code.
    pub fn from_config(config: &ErrorMappingConfig) -> AppResult<Self> {
        let mut mapping = Self::standard();
        mapping.default_status = parse_error_status(config.default_status)
            .map_err(|e| AppError::configuration(format!("errors.default_status: {e}")))?;

        for (&classification, &code) in &config.overrides {
            let status = parse_error_status(code).map_err(|e| {
                AppError::configuration(format!("errors.overrides.{classification:?}: {e}"))
            })?;
            tracing::info!(
                classification = %classification,
                status = status.as_u16(),
                "Status override applied"
            );
            mapping.table.insert(classification, status);
        }

        Ok(mapping)
    }

    /// Status for a classification, or the default when unmapped.
    pub fn status_for(&self, classification: ErrorClassification) -> StatusCode {
        self.table
            .get(&classification)
            .copied()
            .unwrap_or(self.default_status)
    }

    /// Status for an optional classification; `None` yields the default.
    pub fn status_or_default(&self, classification: Option<ErrorClassification>) -> StatusCode {
        classification.map_or(self.default_status, |c| self.status_for(c))
    }

    /// Status used for unclassified and unmapped errors.
    pub fn default_status(&self) -> StatusCode {
        self.default_status
    }

    /// Whether the classification has an explicit entry.
    pub fn contains(&self, classification: ErrorClassification) -> bool {
        self.table.contains_key(&classification)
    }
}

impl Default for StatusMapping {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_error_status(code: u16) -> Result<StatusCode, String> {
    let status = StatusCode::from_u16(code).map_err(|e| format!("{code}: {e}"))?;
    if status.is_client_error() || status.is_server_error() {
        Ok(status)
    } else {
        Err(format!("{code} is not an error status"))
    }
}
