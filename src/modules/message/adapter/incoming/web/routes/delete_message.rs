use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::message::application::ports::incoming::use_cases::DeleteMessageError;
use crate::message::domain::MessageId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/messages/{message_id:\\d+}")]
pub async fn delete_message_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = MessageId::from(path.into_inner());

    match data.message.delete.execute(caller.principal, id).await {
        Ok(()) => ApiResponse::message("Message deleted successfully"),

        Err(DeleteMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(e @ DeleteMessageError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(DeleteMessageError::RepositoryError(e)) => {
            error!(error = %e, message_id = %id, "Failed to delete message");
            ApiResponse::internal_error()
        }
    }
}
