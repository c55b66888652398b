use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Role;
use services::{policy, review_service, review_service::ReviewPatch};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// PUT /reviews/{review_id}
///
/// Update a review. Only teachers and admins may call this; a teacher may
/// edit an unassigned review or their own, but not one claimed by another
/// teacher. Both checks run before any write.
///
/// ### Responses
/// - `200 OK` with the updated review
/// - `403 Forbidden` on role or reviewer-ownership failure
/// - `404 Not Found` when the review does not exist
pub async fn update_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(review_id): Path<i64>,
    Json(patch): Json<ReviewPatch>,
) -> Response {
    if policy::require_role(&user, &[Role::Teacher, Role::Admin]).is_err() {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Forbidden")),
        )
            .into_response();
    }

    let review = match review_service::find_by_id(state.db(), review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Review not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    if policy::require_review_editor(&user, &review).is_err() {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Forbidden")),
        )
            .into_response();
    }

    match review_service::update(state.db(), review, patch).await {
        Ok(updated) => {
            Json(ApiResponse::success(updated, "Review updated successfully")).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
