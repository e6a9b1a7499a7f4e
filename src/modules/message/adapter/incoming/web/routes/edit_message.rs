use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::message::application::ports::incoming::use_cases::EditMessageError;
use crate::message::domain::MessageId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditMessageRequest {
    pub content: String,
}

#[put("/messages/{message_id:\\d+}")]
pub async fn edit_message_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    payload: web::Json<EditMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = MessageId::from(path.into_inner());

    match data
        .message
        .edit
        .execute(caller.principal, id, payload.into_inner().content)
        .await
    {
        Ok(message) => ApiResponse::success(message),

        Err(EditMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(e @ EditMessageError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),

        Err(e @ EditMessageError::EmptyContent) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(EditMessageError::RepositoryError(e)) => {
            error!(error = %e, message_id = %id, "Failed to edit message");
            ApiResponse::internal_error()
        }
    }
}
