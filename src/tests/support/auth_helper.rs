use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ISSUER: &str = "test_issuer";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn token_for(principal: Principal) -> String {
    let email = match principal {
        Principal::User(id) => format!("user{}@example.com", id),
        Principal::Lawyer(id) => format!("lawyer{}@example.com", id),
        Principal::Admin => "admin@justicenest.com".to_string(),
    };

    test_jwt_service()
        .generate_access_token(&email, principal)
        .unwrap()
}

/// `Authorization` header tuple for `TestRequest::insert_header`.
pub fn bearer(principal: Principal) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(principal)))
}
