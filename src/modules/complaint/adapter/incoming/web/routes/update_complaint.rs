use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::complaint::application::ports::incoming::use_cases::{
    UpdateComplaintCommand, UpdateComplaintError, UpdateComplaintForm,
};
use crate::complaint::application::ports::outgoing::ComplaintResult;
use crate::complaint::domain::ComplaintId;
use crate::media::adapter::incoming::{text_field, upload_field};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(MultipartForm)]
pub struct UpdateComplaintMultipart {
    pub name: Option<Text<String>>,
    pub number: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub state: Option<Text<String>>,
    pub gender: Option<Text<String>>,
    pub complaint_details: Option<Text<String>>,
    pub status: Option<Text<String>>,
    pub file: Option<Bytes>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedComplaintBody {
    pub message: &'static str,
    pub complaint: ComplaintResult,
}

#[put("/complaints/{id:\\d+}")]
pub async fn update_complaint_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    MultipartForm(form): MultipartForm<UpdateComplaintMultipart>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ComplaintId::from(path.into_inner());

    let command = match UpdateComplaintCommand::new(UpdateComplaintForm {
        name: text_field(form.name),
        number: text_field(form.number),
        city: text_field(form.city),
        state: text_field(form.state),
        gender: text_field(form.gender),
        complaint_details: text_field(form.complaint_details),
        status: text_field(form.status),
        file: upload_field(form.file),
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .complaint
        .update
        .execute(caller.principal, id, command)
        .await
    {
        Ok(complaint) => ApiResponse::success(UpdatedComplaintBody {
            message: "Complaint updated successfully",
            complaint,
        }),

        Err(UpdateComplaintError::NotFound) => {
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        Err(UpdateComplaintError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not authorized to update this complaint")
        }

        Err(e @ UpdateComplaintError::InvalidStatusTransition(_)) => {
            ApiResponse::bad_request("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(UpdateComplaintError::RepositoryError(e)) => {
            error!(error = %e, complaint_id = %id, "Failed to update complaint");
            ApiResponse::internal_error()
        }
    }
}
