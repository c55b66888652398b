use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use services::{essay_service, policy};
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEssayRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// POST /essays
///
/// Create a new essay owned by the caller. New essays start as drafts.
///
/// ### Responses
/// - `201 Created` with the essay
/// - `400 Bad Request` on validation failure
pub async fn create_essay(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateEssayRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    let params = essay_service::CreateEssay {
        author_id: user.id,
        title: req.title,
        content: req.content,
    };

    match essay_service::create(state.db(), params).await {
        Ok(essay) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(essay, "Essay created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackQueuedResponse {
    pub job_id: Uuid,
}

/// POST /essays/{essay_id}/ai-feedback
///
/// Submit the essay to the asynchronous AI review pipeline. Only the
/// essay's author may trigger it. The response acknowledges that the job
/// was accepted; the outcome is never returned here — the review appears
/// on the essay once the worker commits it.
///
/// ### Responses
/// - `202 Accepted` with `{ job_id }`
/// - `403 Forbidden` when the caller does not own the essay
/// - `404 Not Found` when the essay does not exist
pub async fn trigger_ai_feedback(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(essay_id): Path<i64>,
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

    match state.queue().enqueue(essay.id) {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(ApiResponse::success(
                FeedbackQueuedResponse { job_id },
                "AI feedback queued",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(e.to_string())),
        )
            .into_response(),
    }
}
