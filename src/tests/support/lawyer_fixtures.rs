use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    CreateLawyerData, LawyerCredentials, LawyerRepository, LawyerRepositoryError, LawyerResult,
    PatchLawyerData,
};
use crate::lawyer::domain::LawyerStatus;

pub fn lawyer_result(id: i32, status: LawyerStatus, is_active: bool) -> LawyerResult {
    LawyerResult {
        id: LawyerId::from(id),
        name: format!("Lawyer {}", id),
        email: format!("lawyer{}@example.com", id),
        phone_number: "9876543210".to_string(),
        city: Some("Pune".to_string()),
        state: Some("Maharashtra".to_string()),
        specialization: Some("Criminal law".to_string()),
        years_of_experience: 5.0,
        gender: None,
        fees_range: "1000-3000".to_string(),
        id_proof_url: "https://cdn.test/lawyers/id_proof/id.png".to_string(),
        photo_url: "https://cdn.test/lawyers/photo/p.png".to_string(),
        status,
        is_active,
        created_at: Utc::now(),
    }
}

struct StoredLawyer {
    lawyer: LawyerResult,
    password_hash: String,
}

/// Vec-backed repository mirroring the Postgres adapter's filters.
#[derive(Default)]
pub struct InMemoryLawyerRepository {
    rows: Mutex<Vec<StoredLawyer>>,
    fail_with: Option<LawyerRepositoryError>,
}

impl InMemoryLawyerRepository {
    pub fn failing(err: LawyerRepositoryError) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    /// Stored with password hash `hashed:secret`.
    pub fn with_lawyer(self, lawyer: LawyerResult) -> Self {
        self.rows.lock().unwrap().push(StoredLawyer {
            lawyer,
            password_hash: "hashed:secret".to_string(),
        });
        self
    }

    pub fn get(&self, id: i32) -> Option<LawyerResult> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.lawyer.id == LawyerId::from(id))
            .map(|r| r.lawyer.clone())
    }

    pub fn stored_hash(&self, id: i32) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.lawyer.id == LawyerId::from(id))
            .map(|r| r.password_hash.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), LawyerRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LawyerRepository for InMemoryLawyerRepository {
    async fn create_lawyer(
        &self,
        data: CreateLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|r| r.lawyer.email == data.email) {
            return Err(LawyerRepositoryError::EmailAlreadyExists);
        }

        let id = rows.iter().map(|r| r.lawyer.id.value()).max().unwrap_or(0) + 1;
        let lawyer = LawyerResult {
            id: LawyerId::from(id),
            name: data.name,
            email: data.email,
            phone_number: data.phone_number,
            city: data.city,
            state: data.state,
            specialization: data.specialization,
            years_of_experience: data.years_of_experience,
            gender: data.gender,
            fees_range: data.fees_range,
            id_proof_url: data.id_proof_url,
            photo_url: data.photo_url,
            status: LawyerStatus::Pending,
            is_active: true,
            created_at: Utc::now(),
        };
        rows.push(StoredLawyer {
            lawyer: lawyer.clone(),
            password_hash: data.password_hash,
        });
        Ok(lawyer)
    }

    async fn find_by_id(
        &self,
        id: LawyerId,
    ) -> Result<Option<LawyerResult>, LawyerRepositoryError> {
        self.check()?;
        Ok(self.get(id.value()))
    }

    async fn find_active_by_id(
        &self,
        id: LawyerId,
    ) -> Result<Option<LawyerResult>, LawyerRepositoryError> {
        self.check()?;
        Ok(self.get(id.value()).filter(|l| l.is_active))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<LawyerCredentials>, LawyerRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.lawyer.email == email)
            .map(|r| LawyerCredentials {
                lawyer: r.lawyer.clone(),
                password_hash: r.password_hash.clone(),
            }))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, LawyerRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.lawyer.email == email))
    }

    async fn list_active_by_status(
        &self,
        status: LawyerStatus,
    ) -> Result<Vec<LawyerResult>, LawyerRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.lawyer.is_active && r.lawyer.status == status)
            .map(|r| r.lawyer.clone())
            .collect())
    }

    async fn patch_lawyer(
        &self,
        id: LawyerId,
        data: PatchLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.lawyer.id == id && r.lawyer.is_active)
            .ok_or(LawyerRepositoryError::NotFound)?;

        let l = &mut row.lawyer;
        if let Some(v) = data.name {
            l.name = v;
        }
        if let Some(v) = data.phone_number {
            l.phone_number = v;
        }
        if let Some(v) = data.city {
            l.city = Some(v);
        }
        if let Some(v) = data.state {
            l.state = Some(v);
        }
        if let Some(v) = data.specialization {
            l.specialization = Some(v);
        }
        if let Some(v) = data.years_of_experience {
            l.years_of_experience = v;
        }
        if let Some(v) = data.gender {
            l.gender = Some(v);
        }
        if let Some(v) = data.fees_range {
            l.fees_range = v;
        }
        if let Some(v) = data.photo_url {
            l.photo_url = v;
        }
        if let Some(v) = data.password_hash {
            row.password_hash = v;
        }
        Ok(row.lawyer.clone())
    }

    async fn deactivate(&self, id: LawyerId) -> Result<(), LawyerRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.lawyer.id == id && r.lawyer.is_active)
            .ok_or(LawyerRepositoryError::NotFound)?;
        row.lawyer.is_active = false;
        Ok(())
    }

    async fn update_status(
        &self,
        id: LawyerId,
        from: LawyerStatus,
        to: LawyerStatus,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.lawyer.id == id)
            .ok_or(LawyerRepositoryError::NotFound)?;

        if row.lawyer.status != from {
            return Err(LawyerRepositoryError::StatusChanged(from));
        }
        row.lawyer.status = to;
        Ok(row.lawyer.clone())
    }
}
