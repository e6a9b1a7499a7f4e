use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[put("/users/{user_id}")]
pub async fn update_user_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let req = req.into_inner();

    let command = match UpdateUserCommand::new(req.name, req.email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .user
        .update
        .execute(caller.principal, user_id, command)
        .await
    {
        Ok(user) => ApiResponse::success(user),

        Err(UpdateUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only update your own profile")
        }

        Err(UpdateUserError::EmailAlreadyRegistered) => ApiResponse::email_taken(),

        Err(UpdateUserError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}
