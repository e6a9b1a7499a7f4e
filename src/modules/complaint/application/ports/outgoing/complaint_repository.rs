use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::complaint::domain::{ComplaintId, ComplaintStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateComplaintData {
    pub user_id: UserId,
    pub name: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub complaint_details: String,
    pub complaint_file_url: Option<String>,
}

/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchComplaintData {
    pub name: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub gender: Option<String>,
    pub complaint_details: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub complaint_file_url: Option<String>,
}

impl PatchComplaintData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintResult {
    pub id: ComplaintId,
    pub user_id: UserId,
    pub lawyer_id: Option<LawyerId>,
    pub name: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub complaint_details: String,
    pub complaint_file_url: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

/// A user's complaint with the assigned lawyer's contact, when there is one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintWithLawyer {
    #[serde(flatten)]
    pub complaint: ComplaintResult,
    pub lawyer_name: Option<String>,
    pub lawyer_phone: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplaintRepositoryError {
    #[error("Complaint not found")]
    NotFound,

    /// The conditional accept found the complaint already taken.
    #[error("Complaint is no longer pending")]
    NotPending,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create_complaint(
        &self,
        data: CreateComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError>;

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintResult>, ComplaintRepositoryError>;

    /// Newest first, outer-joined to the assigned lawyer.
    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ComplaintRepositoryError>;

    async fn list_by_lawyer(
        &self,
        lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError>;

    /// Oldest first, so the longest-waiting complaint leads.
    async fn list_pending(&self) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError>;

    async fn patch_complaint(
        &self,
        id: ComplaintId,
        data: PatchComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError>;

    /// `UPDATE ... SET lawyer_id = ?, status = 'accepted' WHERE id = ? AND status = 'pending'`.
    async fn accept(
        &self,
        id: ComplaintId,
        lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, ComplaintRepositoryError>;

    async fn delete_complaint(&self, id: ComplaintId) -> Result<(), ComplaintRepositoryError>;
}
