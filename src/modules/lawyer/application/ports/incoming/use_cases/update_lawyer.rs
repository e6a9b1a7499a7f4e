use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::lawyer::application::ports::incoming::use_cases::register_lawyer::non_blank;
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;
use crate::media::application::ports::outgoing::UploadFile;
use crate::shared::validation::{PhoneNumber, PhoneNumberError};

/// Profile edit. Every field is optional and blank text counts as absent.
#[derive(Debug, Clone, Default)]
pub struct UpdateLawyerCommand {
    pub name: Option<String>,
    pub phone_number: Option<PhoneNumber>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: Option<f64>,
    pub gender: Option<String>,
    pub fees_range: Option<String>,
    pub password: Option<String>,
    pub photo: Option<UploadFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateLawyerCommandError {
    #[error("{0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("Years of experience must be a non-negative number")]
    InvalidExperience,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLawyerForm {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: Option<f64>,
    pub gender: Option<String>,
    pub fees_range: Option<String>,
    pub password: Option<String>,
    pub photo: Option<UploadFile>,
}

impl UpdateLawyerCommand {
    pub fn new(form: UpdateLawyerForm) -> Result<Self, UpdateLawyerCommandError> {
        let phone_number = non_blank(form.phone_number)
            .map(|p| PhoneNumber::parse(&p))
            .transpose()?;

        if let Some(years) = form.years_of_experience {
            if !years.is_finite() || years < 0.0 {
                return Err(UpdateLawyerCommandError::InvalidExperience);
            }
        }

        Ok(Self {
            name: non_blank(form.name),
            phone_number,
            city: non_blank(form.city),
            state: non_blank(form.state),
            specialization: non_blank(form.specialization),
            years_of_experience: form.years_of_experience,
            gender: non_blank(form.gender),
            fees_range: non_blank(form.fees_range),
            password: form.password.filter(|p| !p.trim().is_empty()),
            photo: form.photo.filter(|f| !f.is_empty()),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateLawyerError {
    #[error("Lawyer not found")]
    NotFound,

    #[error("Not allowed to update this lawyer profile")]
    Forbidden,

    #[error("Image upload failed: {0}")]
    UploadFailed(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateLawyerUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
        command: UpdateLawyerCommand,
    ) -> Result<LawyerResult, UpdateLawyerError>;
}
