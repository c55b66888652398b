//! # analytics Routes Module
//!
//! Routes for the `/analytics` endpoint group. Staff-only aggregate views
//! over the review table.

pub mod get;

use axum::{Router, routing::get as get_route};

use crate::state::AppState;
use get::summary;

/// Builds the `/analytics` route group.
///
/// - `GET /analytics/summary` → `summary`
pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/summary", get_route(summary))
}
