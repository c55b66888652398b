//! # essays Routes Module
//!
//! Routes for the `/essays` endpoint group. All endpoints are scoped to
//! the authenticated author; the AI feedback trigger is the entry point
//! of the asynchronous review pipeline.

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get as get_route, post as post_route},
};

use crate::state::AppState;
use get::{get_essay, list_essays};
use post::{create_essay, trigger_ai_feedback};
use put::update_essay;

/// Builds the `/essays` route group.
///
/// - `POST /essays` → `create_essay`
/// - `GET /essays` → `list_essays`
/// - `GET /essays/{essay_id}` → `get_essay`
/// - `PUT /essays/{essay_id}` → `update_essay`
/// - `POST /essays/{essay_id}/ai-feedback` → `trigger_ai_feedback`
pub fn essay_routes() -> Router<AppState> {
    Router::new()
        .route("/", post_route(create_essay).get(list_essays))
        .route("/{essay_id}", get_route(get_essay).put(update_essay))
        .route("/{essay_id}/ai-feedback", post_route(trigger_ai_feedback))
}
