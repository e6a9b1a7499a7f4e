use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::incoming::use_cases::GetLawyerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/lawyers/{lawyer_id}")]
pub async fn get_lawyer_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());

    match data.lawyer.get.execute(caller.principal, lawyer_id).await {
        Ok(lawyer) => ApiResponse::success(lawyer),

        Err(GetLawyerError::NotFound) => {
            ApiResponse::not_found("LAWYER_NOT_FOUND", "Lawyer not found")
        }

        Err(GetLawyerError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only access your own profile")
        }

        Err(GetLawyerError::RepositoryError(e)) => {
            error!(error = %e, lawyer_id = %lawyer_id, "Failed to load lawyer");
            ApiResponse::internal_error()
        }
    }
}
