use actix_web::{get, web, Responder};
use tracing::error;

use crate::admin::application::ports::outgoing::AdminStats;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Aggregate counts for the admin dashboard
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current counts", body = inline(SuccessResponse<AdminStats>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/admin/stats")]
pub async fn admin_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(error = %e, "Failed to compute admin stats");
            ApiResponse::internal_error()
        }
    }
}
