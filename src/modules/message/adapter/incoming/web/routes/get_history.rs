use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::message::application::ports::incoming::use_cases::GetHistoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/messages/{user_id:\\d+}/{lawyer_id:\\d+}")]
pub async fn get_history_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, lawyer_id) = path.into_inner();
    let (user_id, lawyer_id) = (UserId::from(user_id), LawyerId::from(lawyer_id));

    match data
        .message
        .history
        .execute(caller.principal, user_id, lawyer_id)
        .await
    {
        Ok(messages) => ApiResponse::success(messages),

        Err(e @ GetHistoryError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),

        Err(GetHistoryError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, lawyer_id = %lawyer_id, "Failed to load chat history");
            ApiResponse::internal_error()
        }
    }
}
