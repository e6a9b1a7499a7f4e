use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::outgoing::ComplaintResult;
use crate::complaint::domain::{ComplaintId, ComplaintStatus};
use crate::media::application::ports::outgoing::UploadFile;
use crate::shared::validation::{PhoneNumber, PhoneNumberError};

#[derive(Debug, Clone, Default)]
pub struct UpdateComplaintForm {
    pub name: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub gender: Option<String>,
    pub complaint_details: Option<String>,
    pub status: Option<String>,
    pub file: Option<UploadFile>,
}

/// Partial edit: `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateComplaintCommand {
    pub name: Option<String>,
    pub number: Option<PhoneNumber>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub gender: Option<String>,
    pub complaint_details: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub file: Option<UploadFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateComplaintCommandError {
    #[error("{0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

fn present(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, UpdateComplaintCommandError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(UpdateComplaintCommandError::EmptyField(field)),
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

impl UpdateComplaintCommand {
    /// Supplied text must be non-blank; a supplied number must be a valid phone.
    pub fn new(form: UpdateComplaintForm) -> Result<Self, UpdateComplaintCommandError> {
        let number = form
            .number
            .map(|n| PhoneNumber::parse(&n))
            .transpose()?;

        Ok(Self {
            name: present(form.name, "Name")?,
            number,
            city: present(form.city, "City")?,
            state: present(form.state, "State")?,
            gender: present(form.gender, "Gender")?,
            complaint_details: present(form.complaint_details, "Complaint details")?,
            status: present(form.status, "Status")?.map(ComplaintStatus::from),
            file: form.file.filter(|f| !f.is_empty()),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateComplaintError {
    #[error("Complaint not found")]
    NotFound,

    #[error("Not authorized to update this complaint")]
    Forbidden,

    #[error("{0}")]
    InvalidStatusTransition(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
        command: UpdateComplaintCommand,
    ) -> Result<ComplaintResult, UpdateComplaintError>;
}
