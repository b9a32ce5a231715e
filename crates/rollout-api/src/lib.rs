//! # rollout-api
//!
//! HTTP API layer for Rollout built on Axum.
//!
//! Hosts the error boundary: handlers and extractors raise [`ApiError`], the
//! exception middleware hands it to the [`ErrorTranslator`], and the client
//! receives a status plus an [`ErrorInfo`](dto::response::ErrorInfo) body.

pub mod app;
pub mod dto;
pub mod error;
pub mod exception;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use exception::{ErrorResponse, ErrorTranslator};
pub use state::AppState;
