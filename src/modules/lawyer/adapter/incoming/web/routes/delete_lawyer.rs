use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::incoming::use_cases::DeleteLawyerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/lawyers/{lawyer_id}")]
pub async fn delete_lawyer_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());

    match data.lawyer.delete.execute(caller.principal, lawyer_id).await {
        Ok(()) => ApiResponse::message("Lawyer deleted successfully"),

        Err(DeleteLawyerError::NotFound) => {
            ApiResponse::not_found("LAWYER_NOT_FOUND", "Lawyer not found")
        }

        Err(DeleteLawyerError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own profile")
        }

        Err(DeleteLawyerError::RepositoryError(e)) => {
            error!(error = %e, lawyer_id = %lawyer_id, "Failed to delete lawyer");
            ApiResponse::internal_error()
        }
    }
}
