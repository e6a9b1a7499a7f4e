use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::domain::LawyerStatus;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLawyerData {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: f64,
    pub gender: Option<String>,
    pub fees_range: String,
    pub id_proof_url: String,
    pub photo_url: String,
    pub password_hash: String,
}

/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchLawyerData {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: Option<f64>,
    pub gender: Option<String>,
    pub fees_range: Option<String>,
    pub photo_url: Option<String>,
    pub password_hash: Option<String>,
}

impl PatchLawyerData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Full lawyer row minus the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawyerResult {
    pub id: LawyerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: f64,
    pub gender: Option<String>,
    pub fees_range: String,
    pub id_proof_url: String,
    pub photo_url: String,
    pub status: LawyerStatus,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LawyerCredentials {
    pub lawyer: LawyerResult,
    pub password_hash: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LawyerRepositoryError {
    #[error("Lawyer not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    /// A conditional status update matched no row.
    #[error("Lawyer is no longer in status '{0}'")]
    StatusChanged(LawyerStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LawyerRepository: Send + Sync {
    async fn create_lawyer(
        &self,
        data: CreateLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError>;

    /// Includes deactivated accounts.
    async fn find_by_id(&self, id: LawyerId)
        -> Result<Option<LawyerResult>, LawyerRepositoryError>;

    async fn find_active_by_id(
        &self,
        id: LawyerId,
    ) -> Result<Option<LawyerResult>, LawyerRepositoryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<LawyerCredentials>, LawyerRepositoryError>;

    async fn email_exists(&self, email: &str) -> Result<bool, LawyerRepositoryError>;

    /// Active lawyers in `status`, oldest first.
    async fn list_active_by_status(
        &self,
        status: LawyerStatus,
    ) -> Result<Vec<LawyerResult>, LawyerRepositoryError>;

    /// Updates an active lawyer; `NotFound` when none matches.
    async fn patch_lawyer(
        &self,
        id: LawyerId,
        data: PatchLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError>;

    /// Sets `is_active = false`. There is no way back.
    async fn deactivate(&self, id: LawyerId) -> Result<(), LawyerRepositoryError>;

    /// `UPDATE ... SET status = to WHERE id = ? AND status = from`.
    async fn update_status(
        &self,
        id: LawyerId,
        from: LawyerStatus,
        to: LawyerStatus,
    ) -> Result<LawyerResult, LawyerRepositoryError>;
}
