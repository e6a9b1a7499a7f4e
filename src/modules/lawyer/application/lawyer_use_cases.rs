use std::sync::Arc;

use crate::lawyer::application::ports::incoming::use_cases::{
    DeleteLawyerUseCase, GetLawyerUseCase, ListLawyersUseCase, LoginLawyerUseCase,
    RegisterLawyerUseCase, UpdateLawyerUseCase,
};

#[derive(Clone)]
pub struct LawyerUseCases {
    pub register: Arc<dyn RegisterLawyerUseCase + Send + Sync>,
    pub login: Arc<dyn LoginLawyerUseCase + Send + Sync>,
    pub list: Arc<dyn ListLawyersUseCase + Send + Sync>,
    pub get: Arc<dyn GetLawyerUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateLawyerUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLawyerUseCase + Send + Sync>,
}
