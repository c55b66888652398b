use sea_orm::{Database, DatabaseConnection};

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    crate::create_schema(&db)
        .await
        .expect("Failed to create schema");

    db
}
