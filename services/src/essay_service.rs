use chrono::Utc;
use db::models::essay;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

#[derive(Debug, Clone)]
pub struct CreateEssay {
    pub author_id: i64,
    pub title: String,
    pub content: String,
}

/// Partial update of an essay. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default)]
pub struct EssayPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_draft: Option<bool>,
}

pub async fn create(db: &DatabaseConnection, params: CreateEssay) -> Result<essay::Model, DbErr> {
    let now = Utc::now();
    let am = essay::ActiveModel {
        title: Set(params.title),
        content: Set(params.content),
        author_id: Set(params.author_id),
        is_draft: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<essay::Model>, DbErr> {
    essay::Entity::find_by_id(id).one(db).await
}

/// Loads an essay only if it belongs to the given author. Used by the
/// owner-scoped essay endpoints, where a foreign essay reads as absent.
pub async fn find_owned(
    db: &DatabaseConnection,
    essay_id: i64,
    author_id: i64,
) -> Result<Option<essay::Model>, DbErr> {
    essay::Entity::find_by_id(essay_id)
        .filter(essay::Column::AuthorId.eq(author_id))
        .one(db)
        .await
}

pub async fn list_for_author(
    db: &DatabaseConnection,
    author_id: i64,
) -> Result<Vec<essay::Model>, DbErr> {
    essay::Entity::find()
        .filter(essay::Column::AuthorId.eq(author_id))
        .order_by_desc(essay::Column::CreatedAt)
        .all(db)
        .await
}

/// Applies a patch to an essay, enumerating each settable field.
pub async fn update(
    db: &DatabaseConnection,
    essay: essay::Model,
    patch: EssayPatch,
) -> Result<essay::Model, DbErr> {
    let mut am: essay::ActiveModel = essay.into();

    if let Some(title) = patch.title {
        am.title = Set(title);
    }
    if let Some(content) = patch.content {
        am.content = Set(content);
    }
    if let Some(is_draft) = patch.is_draft {
        am.is_draft = Set(is_draft);
    }
    am.updated_at = Set(Utc::now());

    am.update(db).await
}
