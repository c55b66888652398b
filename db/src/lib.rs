pub mod models;
pub mod test_utils;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::path::Path;

/// Connects to the database given a DSN or a bare SQLite file path.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_string()
    } else {
        // Ensure parent directory exists (SQLite won't create intermediate dirs).
        if let Some(parent) = Path::new(path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}")
    };

    Database::connect(&url).await
}

/// Creates the `users`, `essays` and `reviews` tables from the entity
/// definitions if they do not exist yet. Used on SQLite startup and by the
/// in-memory test databases.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut users = schema.create_table_from_entity(models::user::Entity);
    let mut essays = schema.create_table_from_entity(models::essay::Entity);
    let mut reviews = schema.create_table_from_entity(models::review::Entity);

    db.execute(backend.build(users.if_not_exists())).await?;
    db.execute(backend.build(essays.if_not_exists())).await?;
    db.execute(backend.build(reviews.if_not_exists())).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::review::{self, ReviewStatus};
    use crate::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let db = setup_test_db().await;
        crate::create_schema(&db).await.expect("second run should be a no-op");
    }

    #[tokio::test]
    async fn status_enum_round_trips_through_sqlite() {
        let db = setup_test_db().await;
        let now = Utc::now();

        let author = crate::models::user::ActiveModel {
            email: Set("author@example.com".into()),
            password_hash: Set("hash".into()),
            first_name: Set("Essay".into()),
            last_name: Set("Author".into()),
            role: Set(Default::default()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let essay = crate::models::essay::ActiveModel {
            title: Set("Essay".into()),
            content: Set("Body".into()),
            author_id: Set(author.id),
            is_draft: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let inserted = review::ActiveModel {
            essay_id: Set(essay.id),
            reviewer_id: Set(None),
            comments: Set(None),
            grammar_score: Set(Some(7.5)),
            clarity_score: Set(None),
            argument_score: Set(None),
            ai_summary: Set(None),
            status: Set(ReviewStatus::AiCompleted),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let fetched = review::Entity::find_by_id(inserted.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.status, ReviewStatus::AiCompleted);
        assert_eq!(fetched.reviewer_id, None);
    }
}
