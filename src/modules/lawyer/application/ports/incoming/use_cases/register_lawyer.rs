use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::credentials::{normalize_email, EmailError};
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::domain::LawyerStatus;
use crate::media::application::ports::outgoing::UploadFile;
use crate::shared::validation::{PhoneNumber, PhoneNumberError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw registration form, validated by [`RegisterLawyerCommand::new`].
#[derive(Debug, Clone)]
pub struct RegisterLawyerForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: f64,
    pub gender: Option<String>,
    pub fees_range: String,
    pub password: String,
    pub id_proof: Option<UploadFile>,
    pub photo: Option<UploadFile>,
}

#[derive(Debug, Clone)]
pub struct RegisterLawyerCommand {
    pub name: String,
    pub email: String,
    pub phone_number: PhoneNumber,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: f64,
    pub gender: Option<String>,
    pub fees_range: String,
    pub password: String,
    pub id_proof: UploadFile,
    pub photo: UploadFile,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterLawyerCommandError {
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("Years of experience must be a non-negative number")]
    InvalidExperience,

    #[error("{0} file is required")]
    MissingFile(&'static str),
}

/// Blank optional text is treated as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: String, field: &'static str) -> Result<String, RegisterLawyerCommandError> {
    non_blank(Some(value)).ok_or(RegisterLawyerCommandError::MissingField(field))
}

impl RegisterLawyerCommand {
    pub fn new(form: RegisterLawyerForm) -> Result<Self, RegisterLawyerCommandError> {
        let name = required(form.name, "Name")?;
        let email = normalize_email(&form.email)?;
        let phone_number = PhoneNumber::parse(&form.phone_number)?;

        if !form.years_of_experience.is_finite() || form.years_of_experience < 0.0 {
            return Err(RegisterLawyerCommandError::InvalidExperience);
        }

        let fees_range = required(form.fees_range, "Fees range")?;

        if form.password.trim().is_empty() {
            return Err(RegisterLawyerCommandError::MissingField("Password"));
        }

        let id_proof = form
            .id_proof
            .filter(|f| !f.is_empty())
            .ok_or(RegisterLawyerCommandError::MissingFile("Identity proof"))?;
        let photo = form
            .photo
            .filter(|f| !f.is_empty())
            .ok_or(RegisterLawyerCommandError::MissingFile("Photo"))?;

        Ok(Self {
            name,
            email,
            phone_number,
            city: non_blank(form.city),
            state: non_blank(form.state),
            specialization: non_blank(form.specialization),
            years_of_experience: form.years_of_experience,
            gender: non_blank(form.gender),
            fees_range,
            password: form.password,
            id_proof,
            photo,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Session handed back after lawyer registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct LawyerSession {
    pub access_token: String,
    pub token_type: &'static str,
    pub lawyer_id: LawyerId,
    pub name: String,
    pub email: String,
    pub status: LawyerStatus,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterLawyerError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Image upload failed: {0}")]
    UploadFailed(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterLawyerUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterLawyerCommand,
    ) -> Result<LawyerSession, RegisterLawyerError>;
}
