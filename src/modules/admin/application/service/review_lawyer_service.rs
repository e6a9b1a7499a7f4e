use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{
    ReviewLawyerError, ReviewLawyerUseCase,
};
use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    LawyerRepository, LawyerRepositoryError, LawyerResult,
};
use crate::lawyer::domain::LawyerStatus;

pub struct ReviewLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
}

impl<R> ReviewLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    async fn load(&self, lawyer_id: LawyerId) -> Result<LawyerResult, ReviewLawyerError> {
        self.repo
            .find_by_id(lawyer_id)
            .await
            .map_err(|e| ReviewLawyerError::RepositoryError(e.to_string()))?
            .ok_or(ReviewLawyerError::NotFound)
    }
}

fn check_transition(
    current: LawyerStatus,
    decision: LawyerStatus,
) -> Result<(), ReviewLawyerError> {
    if current.can_transition_to(decision) {
        Ok(())
    } else {
        Err(ReviewLawyerError::InvalidTransition {
            from: current,
            to: decision,
        })
    }
}

#[async_trait]
impl<R> ReviewLawyerUseCase for ReviewLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(
        &self,
        lawyer_id: LawyerId,
        decision: LawyerStatus,
    ) -> Result<LawyerResult, ReviewLawyerError> {
        let lawyer = self.load(lawyer_id).await?;

        if lawyer.status == decision {
            return Ok(lawyer);
        }
        check_transition(lawyer.status, decision)?;

        match self
            .repo
            .update_status(lawyer_id, lawyer.status, decision)
            .await
        {
            Ok(updated) => {
                tracing::info!(
                    lawyer_id = %lawyer_id,
                    status = %decision,
                    "Lawyer reviewed"
                );
                Ok(updated)
            }

            // Another admin decided first; answer against what they wrote
            Err(LawyerRepositoryError::StatusChanged(_)) => {
                let now = self.load(lawyer_id).await?;
                if now.status == decision {
                    Ok(now)
                } else {
                    Err(ReviewLawyerError::InvalidTransition {
                        from: now.status,
                        to: decision,
                    })
                }
            }

            Err(LawyerRepositoryError::NotFound) => Err(ReviewLawyerError::NotFound),

            Err(e) => Err(ReviewLawyerError::RepositoryError(e.to_string())),
        }
    }
}
