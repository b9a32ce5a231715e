//! Route definitions for the Rollout HTTP API.
//!
//! All routes are mounted under `/api` behind the exception middleware.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with the built-in routes plus `routes`.
///
/// Errors raised by any route, including extractor rejections, are
/// translated by the exception middleware.
pub fn build_router(state: AppState, routes: Router<AppState>) -> Router {
    let api_routes = Router::new().merge(health_routes()).merge(routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::exception::exception_handler,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
