use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::essay_service;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /essays
///
/// List the caller's own essays, newest first.
pub async fn list_essays(State(state): State<AppState>, AuthUser(user): AuthUser) -> Response {
    match essay_service::list_for_author(state.db(), user.id).await {
        Ok(essays) => Json(ApiResponse::success(essays, "Essays fetched successfully"))
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

/// GET /essays/{essay_id}
///
/// Fetch one of the caller's essays. A foreign essay reads as absent.
pub async fn get_essay(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(essay_id): Path<i64>,
) -> Response {
    match essay_service::find_owned(state.db(), essay_id, user.id).await {
        Ok(Some(essay)) => {
            Json(ApiResponse::success(essay, "Essay fetched successfully")).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Essay not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
