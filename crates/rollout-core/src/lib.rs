//! # rollout-core
//!
//! Core crate for the Rollout server. Contains the closed set of error
//! classifications, the classified error types raised by handlers, the
//! classification-to-status table, configuration schemas, and the startup
//! error type.
//!
//! This crate has **no** internal dependencies on other Rollout crates.

pub mod classification;
pub mod config;
pub mod error;
pub mod exception;
pub mod result;
pub mod status;

pub use classification::ErrorClassification;
pub use error::AppError;
pub use exception::{ClassifiedError, MessageNotReadable, MultipartUploadFailed, ServerError};
pub use result::AppResult;
pub use status::StatusMapping;
