//! Custom Axum extractors whose rejections flow through the error boundary.

pub mod json;
pub mod multipart;

pub use json::JsonBody;
pub use multipart::MultipartBody;
