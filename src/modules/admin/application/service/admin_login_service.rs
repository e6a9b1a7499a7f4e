use async_trait::async_trait;
use std::sync::Arc;

use crate::admin::application::admin_credentials::AdminCredentials;
use crate::admin::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginUseCase, AdminSession,
};
use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::TokenProvider;

pub struct AdminLoginService {
    admin: AdminCredentials,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl AdminLoginService {
    pub fn new(admin: AdminCredentials, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { admin, tokens }
    }
}

#[async_trait]
impl AdminLoginUseCase for AdminLoginService {
    async fn execute(&self, email: &str, password: &str) -> Result<AdminSession, AdminLoginError> {
        if !self.admin.matches(email, password) {
            tracing::warn!("Admin login rejected");
            return Err(AdminLoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(&self.admin.email, Principal::Admin)
            .map_err(|e| AdminLoginError::TokenFailed(e.to_string()))?;

        Ok(AdminSession {
            access_token,
            token_type: "bearer",
            email: self.admin.email.clone(),
        })
    }
}
