use std::sync::Arc;

use crate::complaint::application::ports::incoming::use_cases::{
    AcceptComplaintUseCase, CreateComplaintUseCase, DeleteComplaintUseCase, GetComplaintUseCase,
    ListLawyerComplaintsUseCase, ListPendingComplaintsUseCase, ListUserComplaintsUseCase,
    UpdateComplaintUseCase,
};

#[derive(Clone)]
pub struct ComplaintUseCases {
    pub create: Arc<dyn CreateComplaintUseCase + Send + Sync>,
    pub list_by_user: Arc<dyn ListUserComplaintsUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingComplaintsUseCase + Send + Sync>,
    pub list_by_lawyer: Arc<dyn ListLawyerComplaintsUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptComplaintUseCase + Send + Sync>,
    pub get: Arc<dyn GetComplaintUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateComplaintUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteComplaintUseCase + Send + Sync>,
}
