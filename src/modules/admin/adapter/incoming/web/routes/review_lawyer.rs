use actix_web::{patch, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};

use crate::admin::application::ports::incoming::use_cases::ReviewLawyerError;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::domain::LawyerStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ReviewBody {
    pub message: &'static str,
    pub status: LawyerStatus,
}

async fn review(
    data: &AppState,
    admin: &AdminUser,
    lawyer_id: LawyerId,
    decision: LawyerStatus,
    message: &'static str,
) -> HttpResponse {
    match data.admin.review_lawyer.execute(lawyer_id, decision).await {
        Ok(lawyer) => {
            info!(
                lawyer_id = %lawyer_id,
                status = %lawyer.status,
                admin = %admin.email,
                "Lawyer review applied"
            );
            ApiResponse::success(ReviewBody {
                message,
                status: lawyer.status,
            })
        }

        Err(ReviewLawyerError::NotFound) => {
            ApiResponse::not_found("LAWYER_NOT_FOUND", "Lawyer not found")
        }

        Err(e @ ReviewLawyerError::InvalidTransition { .. }) => {
            ApiResponse::bad_request("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(ReviewLawyerError::RepositoryError(e)) => {
            error!(error = %e, lawyer_id = %lawyer_id, "Lawyer review failed");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/admin/approve_lawyer/{lawyer_id}")]
pub async fn approve_lawyer_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());
    review(
        &data,
        &admin,
        lawyer_id,
        LawyerStatus::Approved,
        "Lawyer approved successfully",
    )
    .await
}

#[patch("/admin/reject_lawyer/{lawyer_id}")]
pub async fn reject_lawyer_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());
    review(
        &data,
        &admin,
        lawyer_id,
        LawyerStatus::Rejected,
        "Lawyer rejected",
    )
    .await
}
