use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub access_token: String,
    pub token_type: &'static str,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid admin credentials")]
    InvalidCredentials,

    #[error("Token generation failed: {0}")]
    TokenFailed(String),
}

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<AdminSession, AdminLoginError>;
}
