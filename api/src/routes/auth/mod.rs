//! # auth Routes Module
//!
//! Routes for the `/auth` endpoint group: registration, login and the
//! current-user lookup.

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get as get_route, post as post_route},
};

use crate::state::AppState;
use get::me;
use post::{login, register};

/// Builds the `/auth` route group.
///
/// - `POST /auth/register` → `register`
/// - `POST /auth/login` → `login`
/// - `GET /auth/me` → `me`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post_route(register))
        .route("/login", post_route(login))
        .route("/me", get_route(me))
}
