use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    AdminLoginUseCase, GetAdminStatsUseCase, ListPendingLawyersUseCase, ReviewLawyerUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub pending_lawyers: Arc<dyn ListPendingLawyersUseCase + Send + Sync>,
    pub review_lawyer: Arc<dyn ReviewLawyerUseCase + Send + Sync>,
    pub stats: Arc<dyn GetAdminStatsUseCase + Send + Sync>,
}
