// Shared across the integration test binaries; not every binary uses
// every helper.
#![allow(dead_code)]

use std::sync::Arc;

use ai::{AiConfig, FeedbackClient};
use api::{routes::routes, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use common::AppConfig;
use db::models::user::{self, Role};
use http_body_util::BodyExt;
use queue::FeedbackQueue;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use services::{
    token::TokenService,
    user_service::{self, CreateUser},
};

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub tokens: TokenService,
}

fn test_config() -> AppConfig {
    AppConfig {
        env: "test".into(),
        project_name: "writewise".into(),
        log_level: "api=warn".into(),
        log_file: "api.log".into(),
        log_to_stdout: false,
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        jwt_duration_minutes: 60,
        // Demo mode: the queue's AI client never touches the network.
        gemini_api_key: None,
        gemini_model: "gemini-1.5-flash".into(),
        ai_endpoint: "http://127.0.0.1:1/v1beta".into(),
        feedback_workers: 1,
    }
}

pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let db = db::test_utils::setup_test_db().await;

    let client = Arc::new(FeedbackClient::new(AiConfig::from(&config)));
    let feedback_queue = FeedbackQueue::start(db.clone(), client, config.feedback_workers);
    let tokens = TokenService::new(&config);

    let state = AppState::new(db.clone(), tokens.clone(), feedback_queue);
    TestApp {
        router: routes(state),
        db,
        tokens,
    }
}

pub async fn seed_user(db: &DatabaseConnection, email: &str, role: Role) -> user::Model {
    user_service::register(
        db,
        CreateUser {
            email: email.into(),
            password: "password123".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            role: Some(role),
        },
    )
    .await
    .expect("failed to seed user")
}

pub async fn deactivate_user(db: &DatabaseConnection, user: &user::Model) {
    let mut am: user::ActiveModel = user.clone().into();
    am.is_active = Set(false);
    am.update(db).await.expect("failed to deactivate user");
}

pub fn bearer_token(tokens: &TokenService, user: &user::Model) -> String {
    let (token, _) = tokens.issue(user.id, &user.email).expect("token issue");
    token
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
