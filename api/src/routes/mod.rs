//! Route table for the HTTP surface.
//!
//! Everything here is thin request/response plumbing over the service,
//! queue and policy layers; handlers never mutate state before the
//! relevant policy check has passed.

pub mod analytics;
pub mod auth;
pub mod essays;
pub mod reviews;

use axum::{Router, http::StatusCode, routing::get};

use crate::state::AppState;

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Builds the API router, nested under `/api` by the binary.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/analytics", analytics::analytics_routes())
        .nest("/auth", auth::auth_routes())
        .nest("/essays", essays::essay_routes())
        .nest("/reviews", reviews::review_routes())
        .with_state(state)
}
