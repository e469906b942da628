//! HTTP route handlers.
//!
//! Routes are matched by path only: the original service never inspects the
//! request method, so `POST /health` answers exactly like `GET /health` and
//! that behavior is preserved here via `routing::any`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod service;

use axum::{middleware, routing::any, Router};

use crate::error::AppError;
use crate::middleware::access_log_layer;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes and the access-log middleware.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", any(health::health))
        .route("/", any(service::identity))
        .fallback(not_found)
        // Access-log middleware - creates root span with request_id and prints
        // the per-request stdout line
        .layer(middleware::from_fn(access_log_layer))
}
