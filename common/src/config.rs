//! Application configuration.
//!
//! `AppConfig` is built once at process start from `.env` and environment
//! variables, then handed by reference (or `Arc`) to every component that
//! needs it. There is no global config instance; components never reach
//! into the environment themselves after startup.

use std::env;

/// Runtime configuration for the backend, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: i64,
    /// API key for the generative model. `None` puts the AI feedback
    /// client in demo mode (fixed mock output, no network).
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Base URL of the generative API, overridable for tests.
    pub ai_endpoint: String,
    /// Number of background workers pulling AI feedback jobs.
    pub feedback_workers: usize,
}

impl AppConfig {
    /// Loads the configuration from `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "writewise".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://writewise.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-this-in-production".into()),
            jwt_duration_minutes: env::var("JWT_DURATION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".into()),
            ai_endpoint: env::var("AI_ENDPOINT").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".into()
            }),
            feedback_workers: env::var("FEEDBACK_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(2),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
