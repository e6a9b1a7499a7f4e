use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::lawyer::application::ports::incoming::use_cases::{
    DeleteLawyerError, DeleteLawyerUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    LawyerRepository, LawyerRepositoryError,
};

pub struct DeleteLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
}

impl<R> DeleteLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteLawyerUseCase for DeleteLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
    ) -> Result<(), DeleteLawyerError> {
        self.repo
            .find_active_by_id(lawyer_id)
            .await
            .map_err(|e| DeleteLawyerError::RepositoryError(e.to_string()))?
            .ok_or(DeleteLawyerError::NotFound)?;

        if !caller.is_lawyer(lawyer_id) {
            return Err(DeleteLawyerError::Forbidden);
        }

        self.repo.deactivate(lawyer_id).await.map_err(|e| match e {
            LawyerRepositoryError::NotFound => DeleteLawyerError::NotFound,
            other => DeleteLawyerError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(lawyer_id = %lawyer_id, "Lawyer deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawyer::domain::LawyerStatus;
    use crate::tests::support::lawyer_fixtures::{lawyer_result, InMemoryLawyerRepository};

    #[tokio::test]
    async fn test_soft_delete_keeps_row() {
        let service = DeleteLawyerService::new(
            InMemoryLawyerRepository::default()
                .with_lawyer(lawyer_result(1, LawyerStatus::Approved, true)),
        );

        service
            .execute(Principal::Lawyer(LawyerId::from(1)), LawyerId::from(1))
            .await
            .unwrap();

        let row = service.repo.get(1).unwrap();
        assert!(!row.is_active);
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let service = DeleteLawyerService::new(
            InMemoryLawyerRepository::default()
                .with_lawyer(lawyer_result(1, LawyerStatus::Approved, false)),
        );

        let result = service
            .execute(Principal::Lawyer(LawyerId::from(1)), LawyerId::from(1))
            .await;

        assert!(matches!(result, Err(DeleteLawyerError::NotFound)));
    }

    #[tokio::test]
    async fn test_admin_cannot_delete_lawyer_profile() {
        let service = DeleteLawyerService::new(
            InMemoryLawyerRepository::default()
                .with_lawyer(lawyer_result(1, LawyerStatus::Approved, true)),
        );

        let result = service.execute(Principal::Admin, LawyerId::from(1)).await;

        assert!(matches!(result, Err(DeleteLawyerError::Forbidden)));
    }
}
