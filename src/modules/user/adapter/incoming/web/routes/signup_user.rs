use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    SignupUserCommand, SignupUserError, UserSession,
};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignupUserRequest {
    #[schema(example = "Asha Rao")]
    pub name: String,

    #[schema(example = "asha@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Session body shared by signup and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSessionResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    #[schema(value_type = i32, example = 1)]
    pub user_id: crate::auth::application::domain::entities::UserId,
    pub email: String,
    pub name: String,
}

impl UserSessionResponse {
    pub fn new(message: &str, session: UserSession) -> Self {
        Self {
            message: message.to_string(),
            access_token: session.access_token,
            token_type: session.token_type.to_string(),
            user_id: session.user_id,
            email: session.email,
            name: session.name,
        }
    }
}

/// Register a citizen account
#[utoipa::path(
    post,
    path = "/users/signup",
    tag = "users",
    request_body = SignupUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<UserSessionResponse>)),
        (status = 400, description = "Invalid input or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match SignupUserCommand::new(req.name, req.email, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.user.signup.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user_id, "User signed up");
            ApiResponse::created(UserSessionResponse::new(
                "User registered successfully",
                session,
            ))
        }

        Err(SignupUserError::EmailAlreadyRegistered) => ApiResponse::email_taken(),

        Err(e) => {
            error!(error = %e, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}
