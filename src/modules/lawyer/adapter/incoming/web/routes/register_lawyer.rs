use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::incoming::use_cases::{
    LawyerSession, RegisterLawyerCommand, RegisterLawyerError, RegisterLawyerForm,
};
use crate::lawyer::domain::LawyerStatus;
use crate::media::adapter::incoming::{text_field, upload_field};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(MultipartForm)]
pub struct RegisterLawyerMultipart {
    pub name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone_number: Option<Text<String>>,
    pub city: Option<Text<String>>,
    pub state: Option<Text<String>>,
    pub specialization: Option<Text<String>>,
    pub years_of_experience: Option<Text<String>>,
    pub gender: Option<Text<String>>,
    pub fees_range: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub id_proof: Option<Bytes>,
    pub photo: Option<Bytes>,
}

/// OpenAPI shape of the registration form.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct RegisterLawyerRequestDoc {
    #[schema(example = "Meera Iyer")]
    name: String,
    #[schema(example = "meera@example.com")]
    email: String,
    #[schema(example = "9876543210")]
    phone_number: String,
    city: Option<String>,
    state: Option<String>,
    specialization: Option<String>,
    #[schema(example = 4.5)]
    years_of_experience: f64,
    gender: Option<String>,
    #[schema(example = "1000-3000")]
    fees_range: String,
    password: String,
    #[schema(value_type = String, format = Binary)]
    id_proof: Vec<u8>,
    #[schema(value_type = String, format = Binary)]
    photo: Vec<u8>,
}

/// Session body shared by lawyer registration and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LawyerSessionResponse {
    pub message: String,
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    #[schema(value_type = i32, example = 7)]
    pub lawyer_id: LawyerId,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "pending")]
    pub status: LawyerStatus,
}

impl LawyerSessionResponse {
    pub fn new(message: &str, session: LawyerSession) -> Self {
        Self {
            message: message.to_string(),
            access_token: session.access_token,
            token_type: session.token_type.to_string(),
            lawyer_id: session.lawyer_id,
            name: session.name,
            email: session.email,
            status: session.status,
        }
    }
}

/// Absent means absent; present text must be a number.
pub(crate) fn parse_experience(raw: Option<String>) -> Result<Option<f64>, &'static str> {
    match raw.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(r) => r
            .parse::<f64>()
            .map(Some)
            .map_err(|_| "Years of experience must be a number"),
    }
}

/// Lawyer self-registration; the account starts in `pending`
#[utoipa::path(
    post,
    path = "/lawyers",
    tag = "lawyers",
    request_body(content = RegisterLawyerRequestDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Lawyer registered, awaiting approval", body = inline(SuccessResponse<LawyerSessionResponse>)),
        (status = 400, description = "Invalid input or email already registered", body = ErrorResponse),
        (status = 500, description = "Image upload or internal failure", body = ErrorResponse),
    )
)]
#[post("/lawyers")]
pub async fn register_lawyer_handler(
    MultipartForm(form): MultipartForm<RegisterLawyerMultipart>,
    data: web::Data<AppState>,
) -> impl Responder {
    let years_of_experience = match parse_experience(text_field(form.years_of_experience)) {
        Ok(Some(years)) => years,
        Ok(None) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Years of experience cannot be empty",
            )
        }
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", msg),
    };

    let command = match RegisterLawyerCommand::new(RegisterLawyerForm {
        name: text_field(form.name).unwrap_or_default(),
        email: text_field(form.email).unwrap_or_default(),
        phone_number: text_field(form.phone_number).unwrap_or_default(),
        city: text_field(form.city),
        state: text_field(form.state),
        specialization: text_field(form.specialization),
        years_of_experience,
        gender: text_field(form.gender),
        fees_range: text_field(form.fees_range).unwrap_or_default(),
        password: text_field(form.password).unwrap_or_default(),
        id_proof: upload_field(form.id_proof),
        photo: upload_field(form.photo),
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.lawyer.register.execute(command).await {
        Ok(session) => {
            info!(lawyer_id = %session.lawyer_id, "Lawyer registered");
            ApiResponse::created(LawyerSessionResponse::new(
                "Lawyer registered successfully. Please wait for admin approval.",
                session,
            ))
        }

        Err(RegisterLawyerError::EmailAlreadyRegistered) => ApiResponse::email_taken(),

        Err(e @ RegisterLawyerError::UploadFailed(_)) => {
            ApiResponse::upstream_error("UPLOAD_FAILED", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Lawyer registration failed");
            ApiResponse::internal_error()
        }
    }
}
