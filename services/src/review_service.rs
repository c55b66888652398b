use chrono::Utc;
use db::models::review::{self, ReviewStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;

/// Partial update of a review.
///
/// Applied by an explicit merge that enumerates every settable field;
/// anything left as `None` keeps its stored value. `reviewer_id` is not
/// patchable: it is written once, either by the worker (as absent) or
/// never.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPatch {
    pub comments: Option<String>,
    pub grammar_score: Option<f64>,
    pub clarity_score: Option<f64>,
    pub argument_score: Option<f64>,
    pub ai_summary: Option<String>,
    pub status: Option<ReviewStatus>,
}

impl ReviewPatch {
    fn apply(self, review: review::Model) -> review::ActiveModel {
        let mut am: review::ActiveModel = review.into();

        if let Some(comments) = self.comments {
            am.comments = Set(Some(comments));
        }
        if let Some(grammar_score) = self.grammar_score {
            am.grammar_score = Set(Some(grammar_score));
        }
        if let Some(clarity_score) = self.clarity_score {
            am.clarity_score = Set(Some(clarity_score));
        }
        if let Some(argument_score) = self.argument_score {
            am.argument_score = Set(Some(argument_score));
        }
        if let Some(ai_summary) = self.ai_summary {
            am.ai_summary = Set(Some(ai_summary));
        }
        if let Some(status) = self.status {
            am.status = Set(status);
        }
        am.updated_at = Set(Utc::now());

        am
    }
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<review::Model>, DbErr> {
    review::Entity::find_by_id(id).one(db).await
}

pub async fn list_for_reviewer(
    db: &DatabaseConnection,
    reviewer_id: i64,
) -> Result<Vec<review::Model>, DbErr> {
    review::Entity::find()
        .filter(review::Column::ReviewerId.eq(reviewer_id))
        .order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn list_for_essay(
    db: &DatabaseConnection,
    essay_id: i64,
) -> Result<Vec<review::Model>, DbErr> {
    review::Entity::find()
        .filter(review::Column::EssayId.eq(essay_id))
        .all(db)
        .await
}

pub async fn update(
    db: &DatabaseConnection,
    review: review::Model,
    patch: ReviewPatch,
) -> Result<review::Model, DbErr> {
    patch.apply(review).update(db).await
}

/// Inserts the review row produced by the AI feedback worker.
///
/// `reviewer_id` stays absent and the status is `ai_completed`; together
/// these mark the review as AI-authored. Scores are stored exactly as
/// supplied, unclamped.
pub async fn insert_ai_review(
    db: &DatabaseConnection,
    essay_id: i64,
    grammar_score: f64,
    clarity_score: f64,
    argument_score: f64,
    ai_summary: String,
) -> Result<review::Model, DbErr> {
    let now = Utc::now();
    let am = review::ActiveModel {
        essay_id: Set(essay_id),
        reviewer_id: Set(None),
        comments: Set(None),
        grammar_score: Set(Some(grammar_score)),
        clarity_score: Set(Some(clarity_score)),
        argument_score: Set(Some(argument_score)),
        ai_summary: Set(Some(ai_summary)),
        status: Set(ReviewStatus::AiCompleted),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::essay_service::{self, CreateEssay};
    use crate::user_service::{self, CreateUser};
    use db::test_utils::setup_test_db;

    async fn seed_essay(db: &DatabaseConnection) -> i64 {
        let author = user_service::register(
            db,
            CreateUser {
                email: "author@example.com".into(),
                password: "password123".into(),
                first_name: "Essay".into(),
                last_name: "Author".into(),
                role: None,
            },
        )
        .await
        .unwrap();
        essay_service::create(
            db,
            CreateEssay {
                author_id: author.id,
                title: "Essay".into(),
                content: "Body".into(),
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn ai_review_rows_carry_the_ai_markers() {
        let db = setup_test_db().await;
        let essay_id = seed_essay(&db).await;

        let review = insert_ai_review(&db, essay_id, 7.5, 8.0, 7.0, "Summary".into())
            .await
            .unwrap();

        assert_eq!(review.reviewer_id, None);
        assert_eq!(review.status, ReviewStatus::AiCompleted);
        assert_eq!(review.grammar_score, Some(7.5));
    }

    #[tokio::test]
    async fn out_of_range_scores_are_stored_unclamped() {
        let db = setup_test_db().await;
        let essay_id = seed_essay(&db).await;

        let review = insert_ai_review(&db, essay_id, 12.0, 5.0, -1.0, "ok".into())
            .await
            .unwrap();

        assert_eq!(review.grammar_score, Some(12.0));
        assert_eq!(review.argument_score, Some(-1.0));
    }

    #[tokio::test]
    async fn patch_merge_keeps_unset_fields() {
        let db = setup_test_db().await;
        let essay_id = seed_essay(&db).await;
        let review = insert_ai_review(&db, essay_id, 7.5, 8.0, 7.0, "Summary".into())
            .await
            .unwrap();

        let updated = update(
            &db,
            review,
            ReviewPatch {
                comments: Some("Looks good".into()),
                status: Some(ReviewStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.comments.as_deref(), Some("Looks good"));
        assert_eq!(updated.status, ReviewStatus::Completed);
        // Untouched fields keep their stored values.
        assert_eq!(updated.grammar_score, Some(7.5));
        assert_eq!(updated.ai_summary.as_deref(), Some("Summary"));
        assert_eq!(updated.reviewer_id, None);
    }
}
