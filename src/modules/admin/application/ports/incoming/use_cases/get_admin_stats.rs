use async_trait::async_trait;

use crate::admin::application::ports::outgoing::AdminStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAdminStatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAdminStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<AdminStats, GetAdminStatsError>;
}
