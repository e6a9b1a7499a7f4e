use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::admin::application::ports::incoming::use_cases::{AdminLoginError, AdminSession};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::LoginRequestDto;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin session. `user_id` is always 0; the admin has no row.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSessionResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    #[schema(example = 0)]
    pub user_id: i32,
    #[schema(example = "Administrator")]
    pub name: String,
    pub email: String,
    #[schema(example = "approved")]
    pub status: String,
}

impl From<AdminSession> for AdminSessionResponse {
    fn from(session: AdminSession) -> Self {
        Self {
            message: "Login successful".to_string(),
            access_token: session.access_token,
            token_type: session.token_type.to_string(),
            user_id: 0,
            name: "Administrator".to_string(),
            email: session.email,
            status: "approved".to_string(),
        }
    }
}

/// Operator login against the configured admin account
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "admin",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AdminSessionResponse>)),
        (status = 401, description = "Invalid admin credentials", body = ErrorResponse),
    )
)]
#[post("/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.admin.login.execute(&req.email, &req.password).await {
        Ok(session) => ApiResponse::success(AdminSessionResponse::from(session)),

        Err(AdminLoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid admin credentials")
        }

        Err(e) => {
            error!(error = %e, "Admin login failed");
            ApiResponse::internal_error()
        }
    }
}
