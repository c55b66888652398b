use crate::{ServiceError, credentials};
use chrono::Utc;
use db::models::user::{self, Role};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<Role>,
}

/// Registers a new user. Fails with [`ServiceError::EmailTaken`] if the
/// email is already registered.
pub async fn register(
    db: &DatabaseConnection,
    params: CreateUser,
) -> Result<user::Model, ServiceError> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(params.email.as_str()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::EmailTaken);
    }

    let now = Utc::now();
    let am = user::ActiveModel {
        email: Set(params.email),
        password_hash: Set(credentials::hash_password(&params.password)?),
        first_name: Set(params.first_name),
        last_name: Set(params.last_name),
        role: Set(params.role.unwrap_or_default()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let user = am.insert(db).await?;
    tracing::info!(user_id = user.id, role = %user.role, "user registered");
    Ok(user)
}

/// Verifies the credentials and returns the matching user.
///
/// The same error is returned whether the email is unknown or the
/// password wrong, so the response does not leak which it was.
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<user::Model, ServiceError> {
    let found = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?;

    match found {
        Some(u) if credentials::verify_password(password, &u.password_hash) => Ok(u),
        _ => Err(ServiceError::InvalidCredentials),
    }
}

/// Loads a user by ID, filtering out deactivated accounts.
pub async fn find_active_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find_by_id(id)
        .filter(user::Column::IsActive.eq(true))
        .one(db)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    fn params(email: &str) -> CreateUser {
        CreateUser {
            email: email.into(),
            password: "password123".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: None,
        }
    }

    #[tokio::test]
    async fn register_defaults_to_student() {
        let db = setup_test_db().await;
        let u = register(&db, params("ada@example.com")).await.unwrap();
        assert_eq!(u.role, Role::Student);
        assert!(u.is_active);
        assert_ne!(u.password_hash, "password123");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = setup_test_db().await;
        register(&db, params("ada@example.com")).await.unwrap();
        let err = register(&db, params("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmailTaken));
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let db = setup_test_db().await;
        register(&db, params("ada@example.com")).await.unwrap();

        assert!(authenticate(&db, "ada@example.com", "password123").await.is_ok());
        assert!(matches!(
            authenticate(&db, "ada@example.com", "nope").await,
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&db, "ghost@example.com", "password123").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn inactive_users_are_not_found() {
        let db = setup_test_db().await;
        let u = register(&db, params("ada@example.com")).await.unwrap();

        let mut am: user::ActiveModel = u.clone().into();
        am.is_active = Set(false);
        am.update(&db).await.unwrap();

        assert!(find_active_by_id(&db, u.id).await.unwrap().is_none());
    }
}
