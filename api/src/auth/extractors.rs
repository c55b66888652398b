use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use db::models::user;
use headers::{Authorization, authorization::Bearer};
use services::user_service;

use crate::state::AppState;

/// The authenticated caller, loaded from the database.
///
/// Extraction checks for a Bearer token in the `Authorization` header,
/// validates it with the process token service, and loads the matching
/// active user. Any failure along that path rejects with `401` before the
/// handler runs; a parse failure is never an error, just "unauthenticated".
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    )
                })?;

        let claims = state
            .tokens()
            .parse(bearer.token())
            .ok_or((StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        let user = user_service::find_active_by_id(state.db(), claims.sub)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Database error"))?
            .ok_or((StatusCode::UNAUTHORIZED, "Inactive or unknown user"))?;

        Ok(AuthUser(user))
    }
}
