use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::{essay_service, policy};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct UpdateEssayRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_draft: Option<bool>,
}

/// PUT /essays/{essay_id}
///
/// Partially update an essay. The ownership check runs before any write,
/// so a rejected caller never mutates a row.
///
/// ### Responses
/// - `200 OK` with the updated essay
/// - `403 Forbidden` when the caller is not the author
/// - `404 Not Found` when the essay does not exist
pub async fn update_essay(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(essay_id): Path<i64>,
    Json(req): Json<UpdateEssayRequest>,
) -> Response {
    let essay = match essay_service::find_by_id(state.db(), essay_id).await {
        Ok(Some(essay)) => essay,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Essay not found")),
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

    if policy::require_essay_owner(&user, &essay).is_err() {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Forbidden")),
        )
            .into_response();
    }

    let patch = essay_service::EssayPatch {
        title: req.title,
        content: req.content,
        is_draft: req.is_draft,
    };

    match essay_service::update(state.db(), essay, patch).await {
        Ok(updated) => {
            Json(ApiResponse::success(updated, "Essay updated successfully")).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
