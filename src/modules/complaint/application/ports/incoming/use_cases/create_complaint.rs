use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};
use crate::complaint::domain::ComplaintId;
use crate::media::application::ports::outgoing::UploadFile;
use crate::shared::validation::{PhoneNumber, PhoneNumberError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateComplaintForm {
    pub user_id: i32,
    pub name: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub complaint_details: String,
    pub file: Option<UploadFile>,
}

#[derive(Debug, Clone)]
pub struct CreateComplaintCommand {
    pub user_id: UserId,
    pub name: String,
    pub number: PhoneNumber,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub complaint_details: String,
    pub file: Option<UploadFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateComplaintCommandError {
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidPhone(#[from] PhoneNumberError),
}

fn required(value: String, field: &'static str) -> Result<String, CreateComplaintCommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CreateComplaintCommandError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl CreateComplaintCommand {
    pub fn new(form: CreateComplaintForm) -> Result<Self, CreateComplaintCommandError> {
        Ok(Self {
            user_id: UserId::from(form.user_id),
            name: required(form.name, "Name")?,
            number: PhoneNumber::parse(&form.number)?,
            city: required(form.city, "City")?,
            state: required(form.state, "State")?,
            gender: required(form.gender, "Gender")?,
            complaint_details: required(form.complaint_details, "Complaint details")?,
            file: form.file.filter(|f| !f.is_empty()),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateComplaintError {
    #[error("Operation not permitted for this user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Files a complaint on behalf of `command.user_id`, which must be the caller.
/// An attachment that fails to upload is dropped; the complaint is still created.
#[async_trait]
pub trait CreateComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        command: CreateComplaintCommand,
    ) -> Result<ComplaintId, CreateComplaintError>;
}
