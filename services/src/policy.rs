//! Authorization policy checks.
//!
//! Pure, synchronous predicates over the caller's role and resource
//! ownership. Every privileged mutation must pass the relevant check
//! before any state is touched, so a rejection can never leave a partial
//! write behind.

use db::models::{essay, review, user, user::Role};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("forbidden")]
    Forbidden,
}

/// Rejects callers whose role is not in the allowed set.
pub fn require_role(user: &user::Model, allowed: &[Role]) -> Result<(), PolicyError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(PolicyError::Forbidden)
    }
}

/// Essays are mutable only by their author. Admins do not bypass this;
/// the platform has no admin essay-editing surface.
pub fn require_essay_owner(user: &user::Model, essay: &essay::Model) -> Result<(), PolicyError> {
    if essay.author_id == user.id {
        Ok(())
    } else {
        Err(PolicyError::Forbidden)
    }
}

/// A teacher may edit an unassigned review or one they claimed themselves,
/// but not a review claimed by another teacher. Admins bypass ownership.
pub fn require_review_editor(
    user: &user::Model,
    review: &review::Model,
) -> Result<(), PolicyError> {
    match user.role {
        Role::Admin => Ok(()),
        Role::Teacher => match review.reviewer_id {
            Some(reviewer_id) if reviewer_id != user.id => Err(PolicyError::Forbidden),
            _ => Ok(()),
        },
        Role::Student => Err(PolicyError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use db::models::review::ReviewStatus;

    fn make_user(id: i64, role: Role) -> user::Model {
        user::Model {
            id,
            email: format!("user{id}@example.com"),
            password_hash: String::new(),
            first_name: "Test".into(),
            last_name: "User".into(),
            role,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_essay(id: i64, author_id: i64) -> essay::Model {
        essay::Model {
            id,
            title: "Essay".into(),
            content: "Body".into(),
            author_id,
            is_draft: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_review(id: i64, reviewer_id: Option<i64>) -> review::Model {
        review::Model {
            id,
            essay_id: 1,
            reviewer_id,
            comments: None,
            grammar_score: None,
            clarity_score: None,
            argument_score: None,
            ai_summary: None,
            status: ReviewStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn role_membership_is_enforced() {
        let student = make_user(1, Role::Student);
        let teacher = make_user(2, Role::Teacher);
        assert_eq!(
            require_role(&student, &[Role::Teacher, Role::Admin]),
            Err(PolicyError::Forbidden)
        );
        assert_eq!(require_role(&teacher, &[Role::Teacher, Role::Admin]), Ok(()));
    }

    #[test]
    fn only_the_author_may_touch_an_essay() {
        let author = make_user(1, Role::Student);
        let other = make_user(2, Role::Student);
        let admin = make_user(3, Role::Admin);
        let essay = make_essay(10, 1);
        assert_eq!(require_essay_owner(&author, &essay), Ok(()));
        assert_eq!(require_essay_owner(&other, &essay), Err(PolicyError::Forbidden));
        assert_eq!(require_essay_owner(&admin, &essay), Err(PolicyError::Forbidden));
    }

    #[test]
    fn teacher_may_edit_unassigned_or_own_reviews() {
        let teacher = make_user(5, Role::Teacher);
        assert_eq!(require_review_editor(&teacher, &make_review(1, None)), Ok(()));
        assert_eq!(require_review_editor(&teacher, &make_review(2, Some(5))), Ok(()));
        assert_eq!(
            require_review_editor(&teacher, &make_review(3, Some(6))),
            Err(PolicyError::Forbidden)
        );
    }

    #[test]
    fn admin_bypasses_review_ownership() {
        let admin = make_user(9, Role::Admin);
        assert_eq!(require_review_editor(&admin, &make_review(1, Some(5))), Ok(()));
    }

    #[test]
    fn student_never_edits_reviews() {
        let student = make_user(1, Role::Student);
        assert_eq!(
            require_review_editor(&student, &make_review(1, None)),
            Err(PolicyError::Forbidden)
        );
    }
}
