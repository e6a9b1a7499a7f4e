use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::lawyer::application::ports::incoming::use_cases::LawyerPublicProfile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public directory of approved lawyers
#[utoipa::path(
    get,
    path = "/lawyers",
    tag = "lawyers",
    responses(
        (status = 200, description = "Approved, active lawyers", body = inline(SuccessResponse<Vec<LawyerPublicProfile>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/lawyers")]
pub async fn list_lawyers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.lawyer.list.execute().await {
        Ok(lawyers) => ApiResponse::success(lawyers),
        Err(e) => {
            error!(error = %e, "Failed to list lawyers");
            ApiResponse::internal_error()
        }
    }
}
