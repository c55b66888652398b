use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform role of a user. Students write essays, teachers grade them,
/// admins can do both plus user management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_enum")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::Student
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User's unique email address, also the login identifier.
    #[sea_orm(unique)]
    pub email: String,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Role that gates what this user may do.
    pub role: Role,
    /// Deactivated users keep their rows but cannot authenticate.
    pub is_active: bool,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Essays authored by this user.
    #[sea_orm(has_many = "super::essay::Entity")]
    Essay,
    /// Reviews this user has claimed as reviewer.
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::essay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Essay.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
