use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::incoming::use_cases::{
    CreateComplaintCommand, CreateComplaintError, CreateComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{ComplaintRepository, CreateComplaintData};
use crate::complaint::domain::ComplaintId;
use crate::media::application::ports::outgoing::{MediaFolder, MediaUploader};

pub struct CreateComplaintService<R>
where
    R: ComplaintRepository,
{
    repo: R,
    uploader: Arc<dyn MediaUploader + Send + Sync>,
}

impl<R> CreateComplaintService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R, uploader: Arc<dyn MediaUploader + Send + Sync>) -> Self {
        Self { repo, uploader }
    }
}

#[async_trait]
impl<R> CreateComplaintUseCase for CreateComplaintService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        command: CreateComplaintCommand,
    ) -> Result<ComplaintId, CreateComplaintError> {
        if !caller.is_user(command.user_id) {
            return Err(CreateComplaintError::Forbidden);
        }

        let complaint_file_url = match command.file {
            Some(file) => match self.uploader.upload(file, MediaFolder::ComplaintFiles).await {
                Ok(media) => Some(media.secure_url),
                Err(e) => {
                    tracing::warn!(
                        user_id = %command.user_id,
                        error = %e,
                        "Complaint attachment upload failed, filing without it"
                    );
                    None
                }
            },
            None => None,
        };

        let created = self
            .repo
            .create_complaint(CreateComplaintData {
                user_id: command.user_id,
                name: command.name,
                number: command.number.into_inner(),
                city: command.city,
                state: command.state,
                gender: command.gender,
                complaint_details: command.complaint_details,
                complaint_file_url,
            })
            .await
            .map_err(|e| CreateComplaintError::RepositoryError(e.to_string()))?;

        tracing::info!(complaint_id = %created.id, user_id = %created.user_id, "Complaint filed");
        Ok(created.id)
    }
}
