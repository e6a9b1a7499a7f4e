use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    /// Already normalized (trimmed, lowercased)
    pub email: String,
    pub password_hash: String,
}

/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchUserData {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl PatchUserData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResult {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Login lookup result. Never serialized.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: UserResult,
    pub password_hash: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserResult>, UserRepositoryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError>;

    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError>;

    async fn patch_user(
        &self,
        id: UserId,
        data: PatchUserData,
    ) -> Result<UserResult, UserRepositoryError>;

    /// Hard delete. Complaints and messages go with it (FK cascade).
    async fn delete_user(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
