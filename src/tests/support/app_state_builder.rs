use std::sync::Arc;

use actix_web::web;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::ports::incoming::use_cases::{
    AdminLoginUseCase, GetAdminStatsUseCase, ListPendingLawyersUseCase, ReviewLawyerUseCase,
};
use crate::complaint::application::complaint_use_cases::ComplaintUseCases;
use crate::complaint::application::ports::incoming::use_cases::{
    AcceptComplaintUseCase, CreateComplaintUseCase, DeleteComplaintUseCase, GetComplaintUseCase,
    ListLawyerComplaintsUseCase, ListPendingComplaintsUseCase, ListUserComplaintsUseCase,
    UpdateComplaintUseCase,
};
use crate::lawyer::application::lawyer_use_cases::LawyerUseCases;
use crate::lawyer::application::ports::incoming::use_cases::{
    DeleteLawyerUseCase, GetLawyerUseCase, ListLawyersUseCase, LoginLawyerUseCase,
    RegisterLawyerUseCase, UpdateLawyerUseCase,
};
use crate::message::application::message_use_cases::MessageUseCases;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, EditMessageUseCase, GetHistoryUseCase, ListConversationsUseCase,
    SendMessageUseCase,
};
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetUserUseCase, LoginUserUseCase, SignupUserUseCase, UpdateUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;

/// Every use case starts as a stub that panics when called; tests swap in
/// the ones their route touches.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    lawyer: LawyerUseCases,
    admin: AdminUseCases,
    complaint: ComplaintUseCases,
    message: MessageUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                signup: Arc::new(StubSignupUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                get: Arc::new(StubGetUserUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase),
            },
            lawyer: LawyerUseCases {
                register: Arc::new(StubRegisterLawyerUseCase),
                login: Arc::new(StubLoginLawyerUseCase),
                list: Arc::new(StubListLawyersUseCase),
                get: Arc::new(StubGetLawyerUseCase),
                update: Arc::new(StubUpdateLawyerUseCase),
                delete: Arc::new(StubDeleteLawyerUseCase),
            },
            admin: AdminUseCases {
                login: Arc::new(StubAdminLoginUseCase),
                pending_lawyers: Arc::new(StubListPendingLawyersUseCase),
                review_lawyer: Arc::new(StubReviewLawyerUseCase),
                stats: Arc::new(StubGetAdminStatsUseCase),
            },
            complaint: ComplaintUseCases {
                create: Arc::new(StubCreateComplaintUseCase),
                list_by_user: Arc::new(StubListUserComplaintsUseCase),
                list_pending: Arc::new(StubListPendingComplaintsUseCase),
                list_by_lawyer: Arc::new(StubListLawyerComplaintsUseCase),
                accept: Arc::new(StubAcceptComplaintUseCase),
                get: Arc::new(StubGetComplaintUseCase),
                update: Arc::new(StubUpdateComplaintUseCase),
                delete: Arc::new(StubDeleteComplaintUseCase),
            },
            message: MessageUseCases {
                send: Arc::new(StubSendMessageUseCase),
                history: Arc::new(StubGetHistoryUseCase),
                edit: Arc::new(StubEditMessageUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
                conversations: Arc::new(StubListConversationsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Users
    pub fn with_signup_user(mut self, uc: impl SignupUserUseCase + 'static) -> Self {
        self.user.signup = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.user.login = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + 'static) -> Self {
        self.user.get = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    // Lawyers
    pub fn with_register_lawyer(mut self, uc: impl RegisterLawyerUseCase + 'static) -> Self {
        self.lawyer.register = Arc::new(uc);
        self
    }

    pub fn with_login_lawyer(mut self, uc: impl LoginLawyerUseCase + 'static) -> Self {
        self.lawyer.login = Arc::new(uc);
        self
    }

    pub fn with_list_lawyers(mut self, uc: impl ListLawyersUseCase + 'static) -> Self {
        self.lawyer.list = Arc::new(uc);
        self
    }

    pub fn with_get_lawyer(mut self, uc: impl GetLawyerUseCase + 'static) -> Self {
        self.lawyer.get = Arc::new(uc);
        self
    }

    pub fn with_update_lawyer(mut self, uc: impl UpdateLawyerUseCase + 'static) -> Self {
        self.lawyer.update = Arc::new(uc);
        self
    }

    pub fn with_delete_lawyer(mut self, uc: impl DeleteLawyerUseCase + 'static) -> Self {
        self.lawyer.delete = Arc::new(uc);
        self
    }

    // Admin
    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + 'static) -> Self {
        self.admin.login = Arc::new(uc);
        self
    }

    pub fn with_pending_lawyers(mut self, uc: impl ListPendingLawyersUseCase + 'static) -> Self {
        self.admin.pending_lawyers = Arc::new(uc);
        self
    }

    pub fn with_review_lawyer(mut self, uc: impl ReviewLawyerUseCase + 'static) -> Self {
        self.admin.review_lawyer = Arc::new(uc);
        self
    }

    pub fn with_admin_stats(mut self, uc: impl GetAdminStatsUseCase + 'static) -> Self {
        self.admin.stats = Arc::new(uc);
        self
    }

    // Complaints
    pub fn with_create_complaint(mut self, uc: impl CreateComplaintUseCase + 'static) -> Self {
        self.complaint.create = Arc::new(uc);
        self
    }

    pub fn with_list_user_complaints(
        mut self,
        uc: impl ListUserComplaintsUseCase + 'static,
    ) -> Self {
        self.complaint.list_by_user = Arc::new(uc);
        self
    }

    pub fn with_list_pending_complaints(
        mut self,
        uc: impl ListPendingComplaintsUseCase + 'static,
    ) -> Self {
        self.complaint.list_pending = Arc::new(uc);
        self
    }

    pub fn with_list_lawyer_complaints(
        mut self,
        uc: impl ListLawyerComplaintsUseCase + 'static,
    ) -> Self {
        self.complaint.list_by_lawyer = Arc::new(uc);
        self
    }

    pub fn with_accept_complaint(mut self, uc: impl AcceptComplaintUseCase + 'static) -> Self {
        self.complaint.accept = Arc::new(uc);
        self
    }

    pub fn with_get_complaint(mut self, uc: impl GetComplaintUseCase + 'static) -> Self {
        self.complaint.get = Arc::new(uc);
        self
    }

    pub fn with_update_complaint(mut self, uc: impl UpdateComplaintUseCase + 'static) -> Self {
        self.complaint.update = Arc::new(uc);
        self
    }

    pub fn with_delete_complaint(mut self, uc: impl DeleteComplaintUseCase + 'static) -> Self {
        self.complaint.delete = Arc::new(uc);
        self
    }

    // Messages
    pub fn with_send_message(mut self, uc: impl SendMessageUseCase + 'static) -> Self {
        self.message.send = Arc::new(uc);
        self
    }

    pub fn with_get_history(mut self, uc: impl GetHistoryUseCase + 'static) -> Self {
        self.message.history = Arc::new(uc);
        self
    }

    pub fn with_edit_message(mut self, uc: impl EditMessageUseCase + 'static) -> Self {
        self.message.edit = Arc::new(uc);
        self
    }

    pub fn with_delete_message(mut self, uc: impl DeleteMessageUseCase + 'static) -> Self {
        self.message.delete = Arc::new(uc);
        self
    }

    pub fn with_list_conversations(
        mut self,
        uc: impl ListConversationsUseCase + 'static,
    ) -> Self {
        self.message.conversations = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            lawyer: self.lawyer,
            admin: self.admin,
            complaint: self.complaint,
            message: self.message,
        })
    }
}
