//! Exception middleware: translates raised [`ApiError`](crate::error::ApiError)s.

use axum::extract::{OriginalUri, Request, State};
use axum::http::header::HOST;
use axum::http::uri::{Authority, Scheme};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::RaisedError;
use crate::state::AppState;

/// Replaces placeholder error responses with the translated status and body.
pub async fn exception_handler(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let url = request_url(&request);

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<RaisedError>() {
        Some(RaisedError(error)) => state.translator.dispatch(&url, &error).into_response(),
        None => response,
    }
}

/// Absolute URL of the request (scheme, host, path), without the query.
///
/// Falls back to the bare path when no host is known.
fn request_url(request: &Request) -> Uri {
    let uri = match request.extensions().get::<OriginalUri>() {
        Some(OriginalUri(original)) => original,
        None => request.uri(),
    };

    let authority = uri.authority().cloned().or_else(|| {
        request
            .headers()
            .get(HOST)
            .and_then(|host| host.to_str().ok())
            .and_then(|host| host.parse::<Authority>().ok())
    });

    let path_only = || {
        Uri::builder()
            .path_and_query(uri.path())
            .build()
            .unwrap_or_default()
    };

    match authority {
        Some(authority) => Uri::builder()
            .scheme(uri.scheme().cloned().unwrap_or(Scheme::HTTP))
            .authority(authority)
            .path_and_query(uri.path())
            .build()
            .unwrap_or_else(|_| path_only()),
        None => path_only(),
    }
}
