use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminStats {
    pub total_complaints: u64,
    pub pending_complaints: u64,
    pub accepted_complaints: u64,
    pub resolved_complaints: u64,
    pub approved_lawyers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminStatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Recomputed on every call; nothing is cached.
#[async_trait]
pub trait AdminStatsQuery: Send + Sync {
    async fn fetch_stats(&self) -> Result<AdminStats, AdminStatsQueryError>;
}
