use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::adapter::incoming::web::routes::register_lawyer::parse_experience;
use crate::lawyer::application::ports::incoming::use_cases::{
    UpdateLawyerCommand, UpdateLawyerError, UpdateLawyerForm,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;
use crate::media::adapter::incoming::{text_field, upload_field};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(MultipartForm)]
pub struct UpdateLawyerMultipart {
    pub name: Option<Text<String>>,
    pub phone_number: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub state: Option<Text<String>>,
    pub specialization: Option<Text<String>>,
    pub years_of_experience: Option<Text<String>>,
    pub gender: Option<Text<String>>,
    pub fees_range: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub photo: Option<Bytes>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedLawyerBody {
    pub message: &'static str,
    pub lawyer: LawyerResult,
}

#[put("/lawyers/{lawyer_id}")]
pub async fn update_lawyer_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    MultipartForm(form): MultipartForm<UpdateLawyerMultipart>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lawyer_id = LawyerId::from(path.into_inner());

    let years_of_experience = match parse_experience(text_field(form.years_of_experience)) {
        Ok(years) => years,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", msg),
    };

    let command = match UpdateLawyerCommand::new(UpdateLawyerForm {
        name: text_field(form.name),
        phone_number: text_field(form.phone_number),
        city: text_field(form.city),
        state: text_field(form.state),
        specialization: text_field(form.specialization),
        years_of_experience,
        gender: text_field(form.gender),
        fees_range: text_field(form.fees_range),
        password: text_field(form.password),
        photo: upload_field(form.photo),
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .lawyer
        .update
        .execute(caller.principal, lawyer_id, command)
        .await
    {
        Ok(lawyer) => {
            info!(lawyer_id = %lawyer_id, "Lawyer profile updated");
            ApiResponse::success(UpdatedLawyerBody {
                message: "Profile updated successfully",
                lawyer,
            })
        }

        Err(UpdateLawyerError::NotFound) => {
            ApiResponse::not_found("LAWYER_NOT_FOUND", "Lawyer not found")
        }

        Err(UpdateLawyerError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only update your own profile")
        }

        Err(e @ UpdateLawyerError::UploadFailed(_)) => {
            ApiResponse::upstream_error("UPLOAD_FAILED", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, lawyer_id = %lawyer_id, "Failed to update lawyer");
            ApiResponse::internal_error()
        }
    }
}
