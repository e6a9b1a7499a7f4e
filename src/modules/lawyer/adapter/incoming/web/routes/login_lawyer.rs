use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::LoginRequestDto;
use crate::lawyer::adapter::incoming::web::routes::LawyerSessionResponse;
use crate::lawyer::application::ports::incoming::use_cases::LoginLawyerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Lawyer login; pending lawyers may log in and see their status
#[utoipa::path(
    post,
    path = "/lawyers/login",
    tag = "lawyers",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LawyerSessionResponse>)),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
    )
)]
#[post("/lawyers/login")]
pub async fn login_lawyer_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let credentials = match req.into_inner().into_credentials() {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.lawyer.login.execute(credentials).await {
        Ok(session) => {
            ApiResponse::success(LawyerSessionResponse::new("Login successful", session))
        }

        Err(LoginLawyerError::InvalidCredentials) => {
            warn!("Lawyer login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Lawyer login failed");
            ApiResponse::internal_error()
        }
    }
}
