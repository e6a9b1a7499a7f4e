use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/pending_lawyers")]
pub async fn pending_lawyers_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.pending_lawyers.execute().await {
        Ok(lawyers) => ApiResponse::success(lawyers),
        Err(e) => {
            error!(error = %e, "Failed to list pending lawyers");
            ApiResponse::internal_error()
        }
    }
}
