use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::adapter::incoming::web::routes::AdminSessionResponse;
use crate::admin::application::ports::outgoing::AdminStats;
use crate::auth::adapter::incoming::web::LoginRequestDto;
use crate::complaint::adapter::incoming::web::routes::accept_complaint::AcceptComplaintRequest;
use crate::complaint::adapter::incoming::web::routes::create_complaint::ComplaintCreatedBody;
use crate::complaint::adapter::incoming::web::routes::CreateComplaintRequestDoc;
use crate::lawyer::adapter::incoming::web::routes::{
    LawyerSessionResponse, RegisterLawyerRequestDoc,
};
use crate::lawyer::application::ports::incoming::use_cases::LawyerPublicProfile;
use crate::message::adapter::incoming::web::routes::edit_message::EditMessageRequest;
use crate::message::adapter::incoming::web::routes::SendMessageRequest;
use crate::user::adapter::incoming::web::routes::{SignupUserRequest, UserSessionResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Justice Nest API",
        version = "1.0.0",
        description = "Backend for filing legal complaints and connecting users with lawyers",
    ),
    paths(
        // Users
        crate::user::adapter::incoming::web::routes::signup_user::signup_user_handler,
        crate::user::adapter::incoming::web::routes::login_user::login_user_handler,

        // Lawyers
        crate::lawyer::adapter::incoming::web::routes::register_lawyer::register_lawyer_handler,
        crate::lawyer::adapter::incoming::web::routes::login_lawyer::login_lawyer_handler,
        crate::lawyer::adapter::incoming::web::routes::list_lawyers::list_lawyers_handler,

        // Admin
        crate::admin::adapter::incoming::web::routes::admin_login::admin_login_handler,
        crate::admin::adapter::incoming::web::routes::admin_stats::admin_stats_handler,

        // Complaints
        crate::complaint::adapter::incoming::web::routes::create_complaint::create_complaint_handler,

        // Messages
        crate::message::adapter::incoming::web::routes::send_message::send_message_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            SuccessResponse<UserSessionResponse>,

            LoginRequestDto,
            SignupUserRequest,
            UserSessionResponse,
            RegisterLawyerRequestDoc,
            LawyerSessionResponse,
            LawyerPublicProfile,
            AdminSessionResponse,
            AdminStats,
            CreateComplaintRequestDoc,
            ComplaintCreatedBody,
            AcceptComplaintRequest,
            SendMessageRequest,
            EditMessageRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Citizen accounts"),
        (name = "lawyers", description = "Lawyer registration and directory"),
        (name = "admin", description = "Lawyer vetting and platform statistics"),
        (name = "complaints", description = "Complaint filing and case acceptance"),
        (name = "messages", description = "User and lawyer chat"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by any of the login endpoints"))
                        .build(),
                ),
            )
        }
    }
}
