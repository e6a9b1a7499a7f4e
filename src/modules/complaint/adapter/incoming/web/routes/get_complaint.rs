use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::complaint::application::ports::incoming::use_cases::GetComplaintError;
use crate::complaint::domain::ComplaintId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/complaints/{id:\\d+}")]
pub async fn get_complaint_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ComplaintId::from(path.into_inner());

    match data.complaint.get.execute(caller.principal, id).await {
        Ok(complaint) => ApiResponse::success(complaint),

        Err(GetComplaintError::NotFound) => {
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        Err(GetComplaintError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not authorized to view this complaint")
        }

        Err(GetComplaintError::RepositoryError(e)) => {
            error!(error = %e, complaint_id = %id, "Failed to load complaint");
            ApiResponse::internal_error()
        }
    }
}
