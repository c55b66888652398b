use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use chrono::{DateTime, Utc};
use common::format_validation_errors;
use db::models::user::{self, Role};
use serde::{Deserialize, Serialize};
use services::{ServiceError, user_service};
use validator::Validate;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,

    /// Defaults to student when omitted.
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            is_active: u.is_active,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// POST /auth/register
///
/// Register a new user account.
///
/// ### Responses
/// - `201 Created` with the new user
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the email is already registered
pub async fn register(State(state): State<AppState>, Json(req): Json<RegisterRequest>) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    let params = user_service::CreateUser {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        role: req.role,
    };

    match user_service::register(state.db(), params).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User registered successfully",
            )),
        )
            .into_response(),
        Err(ServiceError::EmailTaken) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error("A user with this email already exists")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

/// POST /auth/login
///
/// Authenticate an existing user and issue a signed bearer token.
///
/// ### Responses
/// - `200 OK` with `{ token, expires_at, user }`
/// - `401 Unauthorized` on bad credentials (indistinguishable whether the
///   email or the password was wrong)
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let user = match user_service::authenticate(state.db(), &req.email, &req.password).await {
        Ok(user) => user,
        Err(ServiceError::InvalidCredentials) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Incorrect email or password")),
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

    match state.tokens().issue(user.id, &user.email) {
        Ok((token, expires_at)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LoginResponse {
                    token,
                    expires_at,
                    user: UserResponse::from(user),
                },
                "Login successful",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Token error: {}", e))),
        )
            .into_response(),
    }
}
