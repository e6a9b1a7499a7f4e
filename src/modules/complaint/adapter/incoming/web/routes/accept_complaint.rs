use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::LawyerId;
use crate::complaint::application::ports::incoming::use_cases::AcceptComplaintError;
use crate::complaint::application::ports::outgoing::ComplaintResult;
use crate::complaint::domain::ComplaintId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AcceptComplaintRequest {
    pub lawyer_id: i32,
}

#[derive(Debug, Serialize)]
pub struct AcceptedComplaintBody {
    pub message: &'static str,
    pub complaint: ComplaintResult,
}

#[put("/complaints/{id:\\d+}/accept")]
pub async fn accept_complaint_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    payload: web::Json<AcceptComplaintRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ComplaintId::from(path.into_inner());
    let lawyer_id = LawyerId::from(payload.lawyer_id);

    match data
        .complaint
        .accept
        .execute(caller.principal, id, lawyer_id)
        .await
    {
        Ok(complaint) => {
            info!(complaint_id = %id, lawyer_id = %lawyer_id, "Complaint accepted");
            ApiResponse::success(AcceptedComplaintBody {
                message: "Complaint accepted successfully",
                complaint,
            })
        }

        Err(AcceptComplaintError::ComplaintNotFound) => {
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        Err(AcceptComplaintError::LawyerNotFound) => {
            ApiResponse::not_found("LAWYER_NOT_FOUND", "Lawyer not found")
        }

        Err(e @ AcceptComplaintError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(e @ AcceptComplaintError::LawyerNotApproved) => {
            ApiResponse::forbidden("LAWYER_NOT_APPROVED", &e.to_string())
        }

        Err(e @ AcceptComplaintError::NotPending) => {
            ApiResponse::bad_request("COMPLAINT_NOT_PENDING", &e.to_string())
        }

        Err(AcceptComplaintError::RepositoryError(e)) => {
            error!(error = %e, complaint_id = %id, "Failed to accept complaint");
            ApiResponse::internal_error()
        }
    }
}
