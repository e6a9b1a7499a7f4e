use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult, ComplaintWithLawyer,
    CreateComplaintData, PatchComplaintData,
};
use crate::complaint::domain::{ComplaintId, ComplaintStatus};

pub fn complaint_result(id: i32, user_id: i32, lawyer_id: Option<i32>) -> ComplaintResult {
    ComplaintResult {
        id: ComplaintId::from(id),
        user_id: UserId::from(user_id),
        lawyer_id: lawyer_id.map(LawyerId::from),
        name: "Ravi Kumar".to_string(),
        number: "9876543210".to_string(),
        city: "Nagpur".to_string(),
        state: "Maharashtra".to_string(),
        gender: "male".to_string(),
        complaint_details: format!("Complaint {}", id),
        complaint_file_url: None,
        status: if lawyer_id.is_some() {
            ComplaintStatus::Accepted
        } else {
            ComplaintStatus::Pending
        },
        // Higher ids are newer
        created_at: Utc::now() + Duration::seconds(id as i64),
    }
}

/// Vec-backed repository mirroring the Postgres adapter's ordering and
/// conditional accept.
#[derive(Default)]
pub struct InMemoryComplaintRepository {
    rows: Mutex<Vec<ComplaintResult>>,
    fail_with: Option<ComplaintRepositoryError>,
}

impl InMemoryComplaintRepository {
    pub fn failing(err: ComplaintRepositoryError) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn with_complaint(self, complaint: ComplaintResult) -> Self {
        self.rows.lock().unwrap().push(complaint);
        self
    }

    pub fn get(&self, id: i32) -> Option<ComplaintResult> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == ComplaintId::from(id))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), ComplaintRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn newest_first(&self, keep: impl Fn(&ComplaintResult) -> bool) -> Vec<ComplaintResult> {
        let mut rows: Vec<ComplaintResult> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| keep(c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create_complaint(
        &self,
        data: CreateComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        let id = rows.iter().map(|c| c.id.value()).max().unwrap_or(0) + 1;
        let complaint = ComplaintResult {
            id: ComplaintId::from(id),
            user_id: data.user_id,
            lawyer_id: None,
            name: data.name,
            number: data.number,
            city: data.city,
            state: data.state,
            gender: data.gender,
            complaint_details: data.complaint_details,
            complaint_file_url: data.complaint_file_url,
            status: ComplaintStatus::Pending,
            created_at: Utc::now(),
        };
        rows.push(complaint.clone());
        Ok(complaint)
    }

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintResult>, ComplaintRepositoryError> {
        self.check()?;
        Ok(self.get(id.value()))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ComplaintRepositoryError> {
        self.check()?;
        Ok(self
            .newest_first(|c| c.user_id == user_id)
            .into_iter()
            .map(|complaint| {
                let lawyer_name = complaint.lawyer_id.map(|id| format!("Lawyer {}", id));
                let lawyer_phone = complaint.lawyer_id.map(|_| "9876543210".to_string());
                ComplaintWithLawyer {
                    complaint,
                    lawyer_name,
                    lawyer_phone,
                }
            })
            .collect())
    }

    async fn list_by_lawyer(
        &self,
        lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError> {
        self.check()?;
        Ok(self.newest_first(|c| c.lawyer_id == Some(lawyer_id)))
    }

    async fn list_pending(&self) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError> {
        self.check()?;
        let mut rows = self.newest_first(|c| c.status.is_pending());
        rows.reverse();
        Ok(rows)
    }

    async fn patch_complaint(
        &self,
        id: ComplaintId,
        data: PatchComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let c = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ComplaintRepositoryError::NotFound)?;

        if let Some(v) = data.name {
            c.name = v;
        }
        if let Some(v) = data.number {
            c.number = v;
        }
        if let Some(v) = data.city {
            c.city = v;
        }
        if let Some(v) = data.state {
            c.state = v;
        }
        if let Some(v) = data.gender {
            c.gender = v;
        }
        if let Some(v) = data.complaint_details {
            c.complaint_details = v;
        }
        if let Some(v) = data.status {
            c.status = v;
        }
        if let Some(v) = data.complaint_file_url {
            c.complaint_file_url = Some(v);
        }
        Ok(c.clone())
    }

    async fn accept(
        &self,
        id: ComplaintId,
        lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let c = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ComplaintRepositoryError::NotFound)?;

        if !c.status.is_pending() {
            return Err(ComplaintRepositoryError::NotPending);
        }
        c.lawyer_id = Some(lawyer_id);
        c.status = ComplaintStatus::Accepted;
        Ok(c.clone())
    }

    async fn delete_complaint(&self, id: ComplaintId) -> Result<(), ComplaintRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);

        if rows.len() == before {
            return Err(ComplaintRepositoryError::NotFound);
        }
        Ok(())
    }
}
