use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::lawyer::application::ports::incoming::use_cases::{
    LawyerSession, RegisterLawyerCommand, RegisterLawyerError, RegisterLawyerUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    CreateLawyerData, LawyerRepository, LawyerRepositoryError,
};
use crate::media::application::ports::outgoing::{MediaFolder, MediaUploader, UploadFile};

pub struct RegisterLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    uploader: Arc<dyn MediaUploader + Send + Sync>,
}

impl<R> RegisterLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(
        repo: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        uploader: Arc<dyn MediaUploader + Send + Sync>,
    ) -> Self {
        Self {
            repo,
            hasher,
            tokens,
            uploader,
        }
    }

    async fn upload(
        &self,
        file: UploadFile,
        folder: MediaFolder,
    ) -> Result<String, RegisterLawyerError> {
        self.uploader
            .upload(file, folder)
            .await
            .map(|media| media.secure_url)
            .map_err(|e| {
                tracing::error!(error = %e, folder = folder.as_str(), "Lawyer document upload failed");
                RegisterLawyerError::UploadFailed(e.to_string())
            })
    }
}

#[async_trait]
impl<R> RegisterLawyerUseCase for RegisterLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterLawyerCommand,
    ) -> Result<LawyerSession, RegisterLawyerError> {
        // Checked before anything is uploaded
        let taken = self
            .repo
            .email_exists(&command.email)
            .await
            .map_err(|e| RegisterLawyerError::RepositoryError(e.to_string()))?;
        if taken {
            return Err(RegisterLawyerError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterLawyerError::HashingFailed(e.to_string()))?;

        let id_proof_url = self
            .upload(command.id_proof, MediaFolder::LawyerIdProof)
            .await?;
        let photo_url = self.upload(command.photo, MediaFolder::LawyerPhoto).await?;

        let lawyer = self
            .repo
            .create_lawyer(CreateLawyerData {
                name: command.name,
                email: command.email,
                phone_number: command.phone_number.into_inner(),
                city: command.city,
                state: command.state,
                specialization: command.specialization,
                years_of_experience: command.years_of_experience,
                gender: command.gender,
                fees_range: command.fees_range,
                id_proof_url,
                photo_url,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                LawyerRepositoryError::EmailAlreadyExists => {
                    RegisterLawyerError::EmailAlreadyRegistered
                }
                other => RegisterLawyerError::RepositoryError(other.to_string()),
            })?;

        let access_token = self
            .tokens
            .generate_access_token(&lawyer.email, Principal::Lawyer(lawyer.id))
            .map_err(|e| RegisterLawyerError::TokenFailed(e.to_string()))?;

        tracing::info!(lawyer_id = %lawyer.id, "Lawyer registered, awaiting approval");

        Ok(LawyerSession {
            access_token,
            token_type: "bearer",
            lawyer_id: lawyer.id,
            name: lawyer.name,
            email: lawyer.email,
            status: lawyer.status,
        })
    }
}
