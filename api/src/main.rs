use std::net::SocketAddr;
use std::sync::Arc;

use ai::FeedbackClient;
use api::auth::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use axum::{Router, middleware::from_fn};
use common::AppConfig;
use queue::FeedbackQueue;
use services::token::TokenService;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    // Configuration is loaded once here and injected everywhere else.
    let config = AppConfig::from_env();
    let _log_guard = common::logger::init_logging(&config);

    let db = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db::create_schema(&db)
        .await
        .expect("Failed to create schema");

    // The feedback queue owns the slow external AI call; requests only
    // ever enqueue.
    let client = Arc::new(FeedbackClient::from_config(&config));
    let feedback_queue = FeedbackQueue::start(db.clone(), client, config.feedback_workers);

    let tokens = TokenService::new(&config);
    let state = AppState::new(db, tokens, feedback_queue);

    let cors = CorsLayer::very_permissive();

    let app = Router::new()
        .nest("/api", routes(state))
        .layer(from_fn(log_request))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}
