use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("a user with this email already exists")]
    EmailTaken,

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}
