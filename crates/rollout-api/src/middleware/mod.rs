//! Axum middleware stack.

pub mod exception;
pub mod logging;
