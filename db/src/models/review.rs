use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents the status of a review throughout its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "review_status_enum")]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Created but no reviewer has started on it.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// A human reviewer is working on it.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Finished by a human reviewer.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Produced by the AI feedback worker.
    #[sea_orm(string_value = "ai_completed")]
    AiCompleted,
}

impl Default for ReviewStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::InProgress => "in_progress",
            ReviewStatus::Completed => "completed",
            ReviewStatus::AiCompleted => "ai_completed",
        };
        write!(f, "{}", s)
    }
}

/// Represents a review of an essay in the `reviews` table.
///
/// `reviewer_id = None` is the sole marker of an AI-authored review; the
/// worker sets it together with [`ReviewStatus::AiCompleted`]. Scores are
/// nominally in `[0, 10]` but stored exactly as supplied, unclamped.
/// Reviews are append/update only, never deleted by the core.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Primary key of the review.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the reviewed essay.
    pub essay_id: i64,
    /// Human reviewer, absent for AI-generated reviews.
    pub reviewer_id: Option<i64>,
    /// Free-text comments from a human reviewer.
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub grammar_score: Option<f64>,
    pub clarity_score: Option<f64>,
    pub argument_score: Option<f64>,
    /// Summary text produced by the AI feedback client.
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_summary: Option<String>,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Link to the reviewed essay.
    #[sea_orm(
        belongs_to = "super::essay::Entity",
        from = "Column::EssayId",
        to = "super::essay::Column::Id"
    )]
    Essay,
    /// Link to the human reviewer, if any.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewerId",
        to = "super::user::Column::Id"
    )]
    Reviewer,
}

impl Related<super::essay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Essay.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
