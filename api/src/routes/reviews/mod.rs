//! # reviews Routes Module
//!
//! Routes for the `/reviews` endpoint group. Reading is open to any
//! authenticated user; updating is gated by role and reviewer ownership.

pub mod get;
pub mod put;

use axum::{
    Router,
    routing::{get as get_route, put as put_route},
};

use crate::state::AppState;
use get::{my_reviews, reviews_for_essay};
use put::update_review;

/// Builds the `/reviews` route group.
///
/// - `GET /reviews/my` → `my_reviews`
/// - `GET /reviews/essay/{essay_id}` → `reviews_for_essay`
/// - `PUT /reviews/{review_id}` → `update_review`
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/my", get_route(my_reviews))
        .route("/essay/{essay_id}", get_route(reviews_for_essay))
        .route("/{review_id}", put_route(update_review))
}
