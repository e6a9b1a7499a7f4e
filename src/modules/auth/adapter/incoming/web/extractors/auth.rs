use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub principal: Principal,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedPrincipal {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("Token provider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        let claims = match token_provider.verify_token(&token) {
            Ok(claims) => claims,
            Err(_) => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))));
            }
        };

        match claims.principal() {
            Ok(principal) => ready(Ok(AuthenticatedPrincipal {
                principal,
                email: claims.sub,
            })),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected token without subject id");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

/// Caller holding the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedPrincipal::from_request(req, payload).into_inner() {
            Ok(AuthenticatedPrincipal {
                principal: Principal::Admin,
                email,
            }) => ready(Ok(AdminUser { email })),
            Ok(_) => ready(Err(create_api_error(ApiResponse::forbidden(
                "ADMIN_ONLY",
                "Admin access required",
            )))),
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
