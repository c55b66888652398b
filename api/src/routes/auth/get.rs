use axum::{Json, response::IntoResponse};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::auth::post::UserResponse;

/// GET /auth/me
///
/// Returns the authenticated caller's own profile.
pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(ApiResponse::success(
        UserResponse::from(user),
        "User fetched successfully",
    ))
}
