use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::review_service;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /reviews/my
///
/// List reviews the caller has claimed as reviewer, newest first.
pub async fn my_reviews(State(state): State<AppState>, AuthUser(user): AuthUser) -> Response {
    match review_service::list_for_reviewer(state.db(), user.id).await {
        Ok(reviews) => {
            Json(ApiResponse::success(reviews, "Reviews fetched successfully")).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

/// GET /reviews/essay/{essay_id}
///
/// List all reviews (human and AI) for an essay.
pub async fn reviews_for_essay(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(essay_id): Path<i64>,
) -> Response {
    match review_service::list_for_essay(state.db(), essay_id).await {
        Ok(reviews) => {
            Json(ApiResponse::success(reviews, "Reviews fetched successfully")).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
