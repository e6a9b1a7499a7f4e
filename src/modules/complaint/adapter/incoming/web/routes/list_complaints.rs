use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::complaint::application::ports::incoming::use_cases::ListComplaintsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn list_error(e: ListComplaintsError, forbidden: &str) -> HttpResponse {
    match e {
        ListComplaintsError::Forbidden => ApiResponse::forbidden("FORBIDDEN", forbidden),
        ListComplaintsError::RepositoryError(e) => {
            error!(error = %e, "Failed to list complaints");
            ApiResponse::internal_error()
        }
    }
}

#[get("/complaints/user/{user_id}")]
pub async fn list_user_complaints_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data
        .complaint
        .list_by_user
        .execute(caller.principal, user_id)
        .await
    {
        Ok(complaints) => ApiResponse::success(complaints),
        Err(e) => list_error(e, "You can only view your own complaints"),
    }
}

#[get("/complaints/pending")]
pub async fn list_pending_complaints_handler(
    caller: AuthenticatedPrincipal,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.complaint.list_pending.execute(caller.principal).await {
        Ok(complaints) => ApiResponse::success(complaints),
        Err(e) => list_error(e, "Only lawyers and administrators can view pending complaints"),
    }
}

#[get("/complaints/lawyer/{lawyer_id}")]
pub async fn list_lawyer_complaints_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());

    match data
        .complaint
        .list_by_lawyer
        .execute(caller.principal, lawyer_id)
        .await
    {
        Ok(complaints) => ApiResponse::success(complaints),
        Err(e) => list_error(e, "You can only view complaints assigned to you"),
    }
}
