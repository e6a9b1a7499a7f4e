use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::incoming::use_cases::{
    UpdateComplaintCommand, UpdateComplaintError, UpdateComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult, PatchComplaintData,
};
use crate::complaint::domain::{ComplaintId, ComplaintStatus};
use crate::media::application::ports::outgoing::{MediaFolder, MediaUploader};

pub struct UpdateComplaintService<R>
where
    R: ComplaintRepository,
{
    repo: R,
    uploader: Arc<dyn MediaUploader + Send + Sync>,
}

impl<R> UpdateComplaintService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R, uploader: Arc<dyn MediaUploader + Send + Sync>) -> Self {
        Self { repo, uploader }
    }
}

#[async_trait]
impl<R> UpdateComplaintUseCase for UpdateComplaintService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
        command: UpdateComplaintCommand,
    ) -> Result<ComplaintResult, UpdateComplaintError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| UpdateComplaintError::RepositoryError(e.to_string()))?
            .ok_or(UpdateComplaintError::NotFound)?;

        if !caller.is_party_to(existing.user_id, existing.lawyer_id) {
            return Err(UpdateComplaintError::Forbidden);
        }

        // Acceptance owns the pending -> accepted edge and the lawyer assignment.
        if let Some(status) = &command.status {
            match status {
                ComplaintStatus::Pending | ComplaintStatus::Accepted => {
                    return Err(UpdateComplaintError::InvalidStatusTransition(format!(
                        "Status cannot be set to '{}' through an update",
                        status
                    )));
                }
                _ if existing.status.is_pending() => {
                    return Err(UpdateComplaintError::InvalidStatusTransition(
                        "Complaint must be accepted by a lawyer before its status changes"
                            .to_string(),
                    ));
                }
                _ => {}
            }
        }

        let complaint_file_url = match command.file {
            Some(file) => match self.uploader.upload(file, MediaFolder::ComplaintFiles).await {
                Ok(media) => Some(media.secure_url),
                Err(e) => {
                    tracing::warn!(complaint_id = %id, error = %e, "Attachment upload failed, keeping previous file");
                    None
                }
            },
            None => None,
        };

        let patch = PatchComplaintData {
            name: command.name,
            number: command.number.map(|n| n.into_inner()),
            city: command.city,
            state: command.state,
            gender: command.gender,
            complaint_details: command.complaint_details,
            status: command.status,
            complaint_file_url,
        };

        self.repo
            .patch_complaint(id, patch)
            .await
            .map_err(|e| match e {
                ComplaintRepositoryError::NotFound => UpdateComplaintError::NotFound,
                other => UpdateComplaintError::RepositoryError(other.to_string()),
            })
    }
}
