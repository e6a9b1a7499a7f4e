use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::admin::application::ports::outgoing::{
    AdminStats, AdminStatsQuery, AdminStatsQueryError,
};
use crate::complaint::adapter::outgoing::sea_orm_entity::complaints;
use crate::complaint::domain::ComplaintStatus;
use crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers;
use crate::lawyer::domain::LawyerStatus;

#[derive(Clone)]
pub struct AdminStatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminStatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn complaints_in(&self, status: ComplaintStatus) -> Result<u64, DbErr> {
        complaints::Entity::find()
            .filter(complaints::Column::Status.eq(status.as_str()))
            .count(&*self.db)
            .await
    }
}

#[async_trait]
impl AdminStatsQuery for AdminStatsQueryPostgres {
    async fn fetch_stats(&self) -> Result<AdminStats, AdminStatsQueryError> {
        let run = async {
            let total_complaints = complaints::Entity::find().count(&*self.db).await?;
            let pending_complaints = self.complaints_in(ComplaintStatus::Pending).await?;
            let accepted_complaints = self.complaints_in(ComplaintStatus::Accepted).await?;
            let resolved_complaints = self.complaints_in(ComplaintStatus::Resolved).await?;
            let approved_lawyers = lawyers::Entity::find()
                .filter(lawyers::Column::Status.eq(LawyerStatus::Approved.as_str()))
                .count(&*self.db)
                .await?;

            Ok::<_, DbErr>(AdminStats {
                total_complaints,
                pending_complaints,
                accepted_complaints,
                resolved_complaints,
                approved_lawyers,
            })
        };

        run.await
            .map_err(|e| AdminStatsQueryError::DatabaseError(e.to_string()))
    }
}
