//! Multipart body extractor.

use axum::extract::{FromRequest, Multipart, Request};

use crate::error::ApiError;

/// Like [`axum::extract::Multipart`], but rejections become
/// [`ApiError::MultipartRejected`]. Field errors convert with `?`.
#[derive(Debug)]
pub struct MultipartBody(pub Multipart);

impl<S> FromRequest<S> for MultipartBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}
