//! Application state shared across Axum route handlers.

use queue::FeedbackQueue;
use sea_orm::DatabaseConnection;
use services::token::TokenService;

/// Central application state: the database connection, the token service
/// and the handle to the feedback queue. Constructed once in `main` (or a
/// test harness) and cloned into handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    tokens: TokenService,
    queue: FeedbackQueue,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, queue: FeedbackQueue) -> Self {
        Self { db, tokens, queue }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn queue(&self) -> &FeedbackQueue {
        &self.queue
    }
}
