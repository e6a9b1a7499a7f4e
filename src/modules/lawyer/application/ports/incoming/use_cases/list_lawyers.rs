use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;
use crate::lawyer::domain::LawyerStatus;

/// What the public directory shows about a lawyer. The identity proof stays private.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LawyerPublicProfile {
    #[schema(value_type = i32, example = 7)]
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
    pub photo_url: String,
    #[schema(value_type = String, example = "approved")]
    pub status: LawyerStatus,
    pub created_at: DateTime<Utc>,
}

impl From<LawyerResult> for LawyerPublicProfile {
    fn from(l: LawyerResult) -> Self {
        Self {
            id: l.id,
            name: l.name,
            email: l.email,
            phone_number: l.phone_number,
            city: l.city,
            state: l.state,
            specialization: l.specialization,
            years_of_experience: l.years_of_experience,
            gender: l.gender,
            fees_range: l.fees_range,
            photo_url: l.photo_url,
            status: l.status,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListLawyersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListLawyersUseCase: Send + Sync {
    /// Approved and active lawyers only.
    async fn execute(&self) -> Result<Vec<LawyerPublicProfile>, ListLawyersError>;
}
