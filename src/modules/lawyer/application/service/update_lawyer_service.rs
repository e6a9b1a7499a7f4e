use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::lawyer::application::ports::incoming::use_cases::{
    UpdateLawyerCommand, UpdateLawyerError, UpdateLawyerUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    LawyerRepository, LawyerRepositoryError, LawyerResult, PatchLawyerData,
};
use crate::media::application::ports::outgoing::{MediaFolder, MediaUploader};

pub struct UpdateLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    uploader: Arc<dyn MediaUploader + Send + Sync>,
}

impl<R> UpdateLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(
        repo: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        uploader: Arc<dyn MediaUploader + Send + Sync>,
    ) -> Self {
        Self {
            repo,
            hasher,
            uploader,
        }
    }
}

#[async_trait]
impl<R> UpdateLawyerUseCase for UpdateLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
        command: UpdateLawyerCommand,
    ) -> Result<LawyerResult, UpdateLawyerError> {
        self.repo
            .find_active_by_id(lawyer_id)
            .await
            .map_err(|e| UpdateLawyerError::RepositoryError(e.to_string()))?
            .ok_or(UpdateLawyerError::NotFound)?;

        if !caller.is_lawyer(lawyer_id) {
            return Err(UpdateLawyerError::Forbidden);
        }

        let password_hash = match &command.password {
            Some(password) => Some(
                self.hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateLawyerError::HashingFailed(e.to_string()))?,
            ),
            None => None,
        };

        // Unlike complaint attachments, a failed photo upload aborts the edit
        let photo_url = match command.photo {
            Some(photo) => Some(
                self.uploader
                    .upload(photo, MediaFolder::LawyerPhoto)
                    .await
                    .map_err(|e| UpdateLawyerError::UploadFailed(e.to_string()))?
                    .secure_url,
            ),
            None => None,
        };

        let patch = PatchLawyerData {
            name: command.name,
            phone_number: command.phone_number.map(|p| p.into_inner()),
            city: command.city,
            state: command.state,
            specialization: command.specialization,
            years_of_experience: command.years_of_experience,
            gender: command.gender,
            fees_range: command.fees_range,
            photo_url,
            password_hash,
        };

        self.repo
            .patch_lawyer(lawyer_id, patch)
            .await
            .map_err(|e| match e {
                LawyerRepositoryError::NotFound => UpdateLawyerError::NotFound,
                other => UpdateLawyerError::RepositoryError(other.to_string()),
            })
    }
}
