use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents a student's essay in the `essays` table.
///
/// An essay belongs to exactly one author and may accumulate any number of
/// reviews (human or AI). Essays are never deleted by the platform core.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "essays")]
pub struct Model {
    /// Primary key of the essay.
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// Full essay body text.
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// ID of the user who wrote the essay.
    pub author_id: i64,
    /// Drafts are visible only to the author.
    pub is_draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Link to the author of this essay.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
    /// Reviews written against this essay.
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
