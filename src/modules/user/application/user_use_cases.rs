use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetUserUseCase, LoginUserUseCase, SignupUserUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub signup: Arc<dyn SignupUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
