use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::complaint::application::ports::incoming::use_cases::DeleteComplaintError;
use crate::complaint::domain::ComplaintId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/complaints/{id:\\d+}")]
pub async fn delete_complaint_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ComplaintId::from(path.into_inner());

    match data.complaint.delete.execute(caller.principal, id).await {
        Ok(()) => ApiResponse::message("Complaint deleted successfully"),

        Err(DeleteComplaintError::NotFound) => {
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        Err(DeleteComplaintError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not authorized to delete this complaint")
        }

        Err(DeleteComplaintError::RepositoryError(e)) => {
            error!(error = %e, complaint_id = %id, "Failed to delete complaint");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::application::domain::entities::{Principal, UserId};
    use crate::complaint::application::ports::incoming::use_cases::DeleteComplaintUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    struct MockDeleteComplaint {
        result: Result<(), DeleteComplaintError>,
    }

    #[async_trait]
    impl DeleteComplaintUseCase for MockDeleteComplaint {
        async fn execute(
            &self,
            _caller: Principal,
            _id: ComplaintId,
        ) -> Result<(), DeleteComplaintError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<(), DeleteComplaintError>) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_delete_complaint(MockDeleteComplaint { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_complaint_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/complaints/3")
            .insert_header(bearer(Principal::User(UserId::from(5))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_success() {
        let (status, body) = call(Ok(())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "Complaint deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_forbidden() {
        let (status, body) = call(Err(DeleteComplaintError::Forbidden)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
