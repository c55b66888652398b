use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Role;
use services::{analytics_service, policy};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /analytics/summary
///
/// Average grammar, clarity and argument scores across every review,
/// plus the total review count. Teachers and admins only.
///
/// ### Responses
/// - `200 OK` with the aggregates
/// - `403 Forbidden` for students
pub async fn summary(State(state): State<AppState>, AuthUser(user): AuthUser) -> Response {
    if policy::require_role(&user, &[Role::Teacher, Role::Admin]).is_err() {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Forbidden")),
        )
            .into_response();
    }

    match analytics_service::summary(state.db()).await {
        Ok(summary) => {
            Json(ApiResponse::success(summary, "Analytics fetched successfully")).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
