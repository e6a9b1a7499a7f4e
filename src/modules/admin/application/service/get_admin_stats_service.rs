use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{
    GetAdminStatsError, GetAdminStatsUseCase,
};
use crate::admin::application::ports::outgoing::{AdminStats, AdminStatsQuery};

pub struct GetAdminStatsService<Q>
where
    Q: AdminStatsQuery,
{
    query: Q,
}

impl<Q> GetAdminStatsService<Q>
where
    Q: AdminStatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAdminStatsUseCase for GetAdminStatsService<Q>
where
    Q: AdminStatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AdminStats, GetAdminStatsError> {
        self.query
            .fetch_stats()
            .await
            .map_err(|e| GetAdminStatsError::QueryError(e.to_string()))
    }
}
