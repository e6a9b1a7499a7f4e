use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{LawyerId, Principal, Role, UserId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token for role '{0}' carries no subject id")]
    MissingSubjectId(Role),

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims. `sub` is the subject's email; `id` is absent for admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl TokenClaims {
    pub fn principal(&self) -> Result<Principal, TokenError> {
        match (self.role, self.id) {
            (Role::Admin, _) => Ok(Principal::Admin),
            (Role::User, Some(id)) => Ok(Principal::User(UserId::from(id))),
            (Role::Lawyer, Some(id)) => Ok(Principal::Lawyer(LawyerId::from(id))),
            (role, None) => Err(TokenError::MissingSubjectId(role)),
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, email: &str, principal: Principal)
        -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
