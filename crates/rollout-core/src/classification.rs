//! The closed set of application error classifications.
//!
//! A classification travels with a [`ServerError`](crate::exception::ServerError)
//! and is the lookup key for the HTTP status table. Its external key is what
//! clients see in the `errorCode` field of an error body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain-specific reason a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClassification {
    /// The addressed entity does not exist.
    EntityNotExists,
    /// An entity with the same identity already exists.
    EntityAlreadyExists,
    /// The entity is read-only and cannot be modified.
    EntityReadOnly,
    /// Sort direction is neither ascending nor descending.
    SortParamInvalidDirection,
    /// Sort field is unknown.
    SortParamInvalidField,
    /// Sort parameter could not be parsed.
    SortParamSyntax,
    /// Search query references an unknown field.
    RsqlParamInvalidField,
    /// Search query could not be parsed.
    RsqlSearchParamSyntax,
    /// The caller lacks the permission for this operation.
    InsufficientPermission,
    /// Storing an uploaded artifact failed.
    ArtifactUploadFailed,
    /// Uploaded artifact does not match the provided SHA-1 checksum.
    ArtifactUploadFailedSha1Match,
    /// Uploaded artifact does not match the provided MD5 checksum.
    ArtifactUploadFailedMd5Match,
    /// Deleting an artifact binary failed.
    ArtifactDeleteFailed,
    /// Loading an artifact binary failed.
    ArtifactLoadFailed,
    /// Too many status entries for a single action.
    ActionStatusTooManyEntries,
    /// Too many attribute entries for a single target.
    AttributesTooManyEntries,
    /// The action is not in a cancelable state.
    ActionNotCancelable,
    /// The action cannot be force-quit.
    ActionNotForceQuittable,
    /// Distribution set creation failed because a mandatory module is missing.
    DsCreationFailedMissingModule,
    /// The module type is not supported by the distribution set type.
    DsModuleUnsupported,
    /// The distribution set type is not defined.
    DsTypeUndefined,
    /// The tenant does not exist.
    TenantNotExists,
    /// The entity is locked by a running operation.
    EntityLocked,
    /// The rollout is in a state that does not allow the operation.
    RolloutIllegalState,
    /// A configuration value failed validation.
    ConfigurationValueInvalid,
    /// A configuration key is unknown.
    ConfigurationKeyInvalid,
    /// The target address is not a valid URI.
    InvalidTargetAddress,
    /// The request body could not be read or deserialized.
    RestBodyNotReadable,
    /// Unspecified repository failure.
    GenericError,
    /// The entity was modified concurrently.
    ConcurrentModification,
}

impl ErrorClassification {
    /// Every classification, in declaration order.
    pub const ALL: [Self; 30] = [
        Self::EntityNotExists,
        Self::EntityAlreadyExists,
        Self::EntityReadOnly,
        Self::SortParamInvalidDirection,
        Self::SortParamInvalidField,
        Self::SortParamSyntax,
        Self::RsqlParamInvalidField,
        Self::RsqlSearchParamSyntax,
        Self::InsufficientPermission,
        Self::ArtifactUploadFailed,
        Self::ArtifactUploadFailedSha1Match,
        Self::ArtifactUploadFailedMd5Match,
        Self::ArtifactDeleteFailed,
        Self::ArtifactLoadFailed,
        Self::ActionStatusTooManyEntries,
        Self::AttributesTooManyEntries,
        Self::ActionNotCancelable,
        Self::ActionNotForceQuittable,
        Self::DsCreationFailedMissingModule,
        Self::DsModuleUnsupported,
        Self::DsTypeUndefined,
        Self::TenantNotExists,
        Self::EntityLocked,
        Self::RolloutIllegalState,
        Self::ConfigurationValueInvalid,
        Self::ConfigurationKeyInvalid,
        Self::InvalidTargetAddress,
        Self::RestBodyNotReadable,
        Self::GenericError,
        Self::ConcurrentModification,
    ];

    /// External key sent to clients as `errorCode`.
    pub fn key(self) -> &'static str {
        match self {
            Self::EntityNotExists => "rollout.server.error.repo.entityNotExists",
            Self::EntityAlreadyExists => "rollout.server.error.repo.entityAlreadyExists",
            Self::EntityReadOnly => "rollout.server.error.repo.entityReadOnly",
            Self::SortParamInvalidDirection => "rollout.server.error.rest.param.sortParamInvalidDirection",
            Self::SortParamInvalidField => "rollout.server.error.rest.param.sortParamInvalidField",
            Self::SortParamSyntax => "rollout.server.error.rest.param.sortParamSyntax",
            Self::RsqlParamInvalidField => "rollout.server.error.rest.param.rsqlInvalidField",
            Self::RsqlSearchParamSyntax => "rollout.server.error.rest.param.rsqlSearchParamSyntax",
            Self::InsufficientPermission => "rollout.server.error.insufficientPermission",
            Self::ArtifactUploadFailed => "rollout.server.error.artifact.uploadFailed",
            Self::ArtifactUploadFailedSha1Match => {
                "rollout.server.error.artifact.uploadFailed.checksum.sha1.match"
            }
            Self::ArtifactUploadFailedMd5Match => {
                "rollout.server.error.artifact.uploadFailed.checksum.md5.match"
            }
            Self::ArtifactDeleteFailed => "rollout.server.error.artifact.deleteFailed",
            Self::ArtifactLoadFailed => "rollout.server.error.artifact.loadFailed",
            Self::ActionStatusTooManyEntries => "rollout.server.error.quota.tooManyStatusEntries",
            Self::AttributesTooManyEntries => "rollout.server.error.quota.tooManyAttributeEntries",
            Self::ActionNotCancelable => "rollout.server.error.action.notCancelable",
            Self::ActionNotForceQuittable => "rollout.server.error.action.notForceQuittable",
            Self::DsCreationFailedMissingModule => "rollout.server.error.distributionset.missingModule",
            Self::DsModuleUnsupported => "rollout.server.error.distributionset.moduleUnsupported",
            Self::DsTypeUndefined => "rollout.server.error.distributionset.typeUndefined",
            Self::TenantNotExists => "rollout.server.error.repo.tenantNotExists",
            Self::EntityLocked => "rollout.server.error.entityLocked",
            Self::RolloutIllegalState => "rollout.server.error.rollout.illegalState",
            Self::ConfigurationValueInvalid => "rollout.server.error.configValueInvalid",
            Self::ConfigurationKeyInvalid => "rollout.server.error.configKeyInvalid",
            Self::InvalidTargetAddress => "rollout.server.error.repo.invalidTargetAddress",
            Self::RestBodyNotReadable => "rollout.server.error.rest.body.notReadable",
            Self::GenericError => "rollout.server.error.repo.genericError",
            Self::ConcurrentModification => "rollout.server.error.repo.concurrentModification",
        }
    }

    /// Message used when an error of this classification carries none.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::EntityNotExists => "The given entity does not exist in the repository",
            Self::EntityAlreadyExists => "The given entity already exists in the repository",
            Self::EntityReadOnly => "The given entity is read only and the change cannot be completed",
            Self::SortParamInvalidDirection => {
                "The given sort parameter direction does not exist"
            }
            Self::SortParamInvalidField => "The given sort parameter field does not exist",
            Self::SortParamSyntax => "The given sort parameter is not well formed",
            Self::RsqlParamInvalidField => "The given search parameter field does not exist",
            Self::RsqlSearchParamSyntax => "The given search parameter is not well formed",
            Self::InsufficientPermission => "Insufficient permission",
            Self::ArtifactUploadFailed => "Upload of artifact failed with internal server error",
            Self::ArtifactUploadFailedSha1Match => {
                "Upload of artifact failed as the provided SHA1 checksum did not match"
            }
            Self::ArtifactUploadFailedMd5Match => {
                "Upload of artifact failed as the provided MD5 checksum did not match"
            }
            Self::ArtifactDeleteFailed => "Deletion of artifact failed with internal server error",
            Self::ArtifactLoadFailed => "Load of artifact failed with internal server error",
            Self::ActionStatusTooManyEntries => "Too many status entries have been inserted",
            Self::AttributesTooManyEntries => "Too many attribute entries have been inserted",
            Self::ActionNotCancelable => "Only active actions which are in status pending are cancelable",
            Self::ActionNotForceQuittable => {
                "Only active actions which are in status pending can be force quit"
            }
            Self::DsCreationFailedMissingModule => {
                "Creation of distribution set failed as module is missing that is configured as mandatory"
            }
            Self::DsModuleUnsupported => {
                "Distribution set type does not contain the given module, i.e. is incompatible"
            }
            Self::DsTypeUndefined => "Distribution set type is not yet defined",
            Self::TenantNotExists => "The tenant does not exist",
            Self::EntityLocked => "The given entity is locked by the server",
            Self::RolloutIllegalState => "The rollout is in the wrong state for the requested operation",
            Self::ConfigurationValueInvalid => "The given configuration value is invalid",
            Self::ConfigurationKeyInvalid => "The given configuration key is not known",
            Self::InvalidTargetAddress => "The target address is not well formed",
            Self::RestBodyNotReadable => "The given request body is not well formed",
            Self::GenericError => "Unknown error occurred",
            Self::ConcurrentModification => {
                "The entity has been modified by another user in the meantime"
            }
        }
    }
}

impl fmt::Display for ErrorClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
