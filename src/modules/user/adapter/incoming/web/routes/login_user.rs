use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::LoginRequestDto;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::UserSessionResponse;
use crate::user::application::ports::incoming::use_cases::LoginUserError;
use crate::AppState;

/// Citizen login
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<UserSessionResponse>)),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
    )
)]
#[post("/users/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let credentials = match req.into_inner().into_credentials() {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.user.login.execute(credentials).await {
        Ok(session) => ApiResponse::success(UserSessionResponse::new("Login successful", session)),

        Err(LoginUserError::InvalidCredentials) => {
            warn!("User login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "User login failed");
            ApiResponse::internal_error()
        }
    }
}
