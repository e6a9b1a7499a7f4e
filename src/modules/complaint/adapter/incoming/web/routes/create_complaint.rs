use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::complaint::application::ports::incoming::use_cases::{
    CreateComplaintCommand, CreateComplaintError, CreateComplaintForm,
};
use crate::complaint::domain::ComplaintId;
use crate::media::adapter::incoming::{text_field, upload_field};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(MultipartForm)]
pub struct CreateComplaintMultipart {
    pub user_id: Option<Text<String>>,
    pub name: Option<Text<String>>,
    pub number: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub state: Option<Text<String>>,
    pub gender: Option<Text<String>>,
    pub complaint_details: Option<Text<String>>,
    pub file: Option<Bytes>,
}

/// OpenAPI shape of the multipart body.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CreateComplaintRequestDoc {
    user_id: i32,
    name: String,
    #[schema(example = "9876543210")]
    number: String,
    city: String,
    state: String,
    gender: String,
    complaint_details: String,
    #[schema(value_type = Option<String>, format = Binary)]
    file: Option<Vec<u8>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintCreatedBody {
    pub message: &'static str,
    #[schema(value_type = i32)]
    pub complaint_id: ComplaintId,
}

/// File a complaint with an optional attachment
#[utoipa::path(
    post,
    path = "/complaints",
    tag = "complaints",
    security(("bearer_auth" = [])),
    request_body(content = CreateComplaintRequestDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Complaint filed", body = inline(SuccessResponse<ComplaintCreatedBody>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "user_id does not match the caller", body = ErrorResponse),
    )
)]
#[post("/complaints")]
pub async fn create_complaint_handler(
    caller: AuthenticatedPrincipal,
    MultipartForm(form): MultipartForm<CreateComplaintMultipart>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match text_field(form.user_id).map(|v| v.parse::<i32>()) {
        Some(Ok(id)) => id,
        _ => return ApiResponse::bad_request("VALIDATION_ERROR", "A numeric user_id is required"),
    };

    let command = match CreateComplaintCommand::new(CreateComplaintForm {
        user_id,
        name: text_field(form.name).unwrap_or_default(),
        number: text_field(form.number).unwrap_or_default(),
        city: text_field(form.city).unwrap_or_default(),
        state: text_field(form.state).unwrap_or_default(),
        gender: text_field(form.gender).unwrap_or_default(),
        complaint_details: text_field(form.complaint_details).unwrap_or_default(),
        file: upload_field(form.file),
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.complaint.create.execute(caller.principal, command).await {
        Ok(complaint_id) => {
            info!(complaint_id = %complaint_id, "Complaint created");
            ApiResponse::created(ComplaintCreatedBody {
                message: "Complaint created successfully",
                complaint_id,
            })
        }

        Err(CreateComplaintError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "You can only file complaints for your own account",
        ),

        Err(CreateComplaintError::RepositoryError(e)) => {
            error!(error = %e, user_id, "Failed to create complaint");
            ApiResponse::internal_error()
        }
    }
}
