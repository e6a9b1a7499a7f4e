use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginUseCase, AdminSession, GetAdminStatsError, GetAdminStatsUseCase,
    ListPendingLawyersError, ListPendingLawyersUseCase, ReviewLawyerError, ReviewLawyerUseCase,
};
use crate::admin::application::ports::outgoing::AdminStats;
use crate::auth::application::domain::{Credentials, LawyerId, Principal, UserId};
use crate::complaint::application::ports::incoming::use_cases::{
    AcceptComplaintError, AcceptComplaintUseCase, CreateComplaintCommand, CreateComplaintError,
    CreateComplaintUseCase, DeleteComplaintError, DeleteComplaintUseCase, GetComplaintError,
    GetComplaintUseCase, ListComplaintsError, ListLawyerComplaintsUseCase,
    ListPendingComplaintsUseCase, ListUserComplaintsUseCase, UpdateComplaintCommand,
    UpdateComplaintError, UpdateComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{ComplaintResult, ComplaintWithLawyer};
use crate::complaint::domain::ComplaintId;
use crate::lawyer::application::ports::incoming::use_cases::{
    DeleteLawyerError, DeleteLawyerUseCase, GetLawyerError, GetLawyerUseCase,
    LawyerPublicProfile, LawyerSession, ListLawyersError, ListLawyersUseCase, LoginLawyerError,
    LoginLawyerUseCase, RegisterLawyerCommand, RegisterLawyerError, RegisterLawyerUseCase,
    UpdateLawyerCommand, UpdateLawyerError, UpdateLawyerUseCase,
};
use crate::lawyer::application::ports::outgoing::LawyerResult;
use crate::lawyer::domain::LawyerStatus;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, EditMessageError, EditMessageUseCase,
    GetHistoryError, GetHistoryUseCase, ListConversationsError, ListConversationsUseCase,
    SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::message::application::ports::outgoing::{ConversationSummary, MessageResult};
use crate::message::domain::{ConversationParty, MessageId};
use crate::user::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase, GetUserError, GetUserUseCase, LoginUserError,
    LoginUserUseCase, SignupUserCommand, SignupUserError, SignupUserUseCase, UpdateUserCommand,
    UpdateUserError, UpdateUserUseCase, UserSession,
};
use crate::user::application::ports::outgoing::UserResult;

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSignupUserUseCase;

#[async_trait]
impl SignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _command: SignupUserCommand) -> Result<UserSession, SignupUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _credentials: Credentials) -> Result<UserSession, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _user_id: UserId,
    ) -> Result<UserResult, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _user_id: UserId,
        _command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _caller: Principal, _user_id: UserId) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Lawyers
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubRegisterLawyerUseCase;

#[async_trait]
impl RegisterLawyerUseCase for StubRegisterLawyerUseCase {
    async fn execute(
        &self,
        _command: RegisterLawyerCommand,
    ) -> Result<LawyerSession, RegisterLawyerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginLawyerUseCase;

#[async_trait]
impl LoginLawyerUseCase for StubLoginLawyerUseCase {
    async fn execute(&self, _credentials: Credentials) -> Result<LawyerSession, LoginLawyerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListLawyersUseCase;

#[async_trait]
impl ListLawyersUseCase for StubListLawyersUseCase {
    async fn execute(&self) -> Result<Vec<LawyerPublicProfile>, ListLawyersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetLawyerUseCase;

#[async_trait]
impl GetLawyerUseCase for StubGetLawyerUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _lawyer_id: LawyerId,
    ) -> Result<LawyerResult, GetLawyerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateLawyerUseCase;

#[async_trait]
impl UpdateLawyerUseCase for StubUpdateLawyerUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _lawyer_id: LawyerId,
        _command: UpdateLawyerCommand,
    ) -> Result<LawyerResult, UpdateLawyerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteLawyerUseCase;

#[async_trait]
impl DeleteLawyerUseCase for StubDeleteLawyerUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _lawyer_id: LawyerId,
    ) -> Result<(), DeleteLawyerError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubAdminLoginUseCase;

#[async_trait]
impl AdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AdminSession, AdminLoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPendingLawyersUseCase;

#[async_trait]
impl ListPendingLawyersUseCase for StubListPendingLawyersUseCase {
    async fn execute(&self) -> Result<Vec<LawyerResult>, ListPendingLawyersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviewLawyerUseCase;

#[async_trait]
impl ReviewLawyerUseCase for StubReviewLawyerUseCase {
    async fn execute(
        &self,
        _lawyer_id: LawyerId,
        _decision: LawyerStatus,
    ) -> Result<LawyerResult, ReviewLawyerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAdminStatsUseCase;

#[async_trait]
impl GetAdminStatsUseCase for StubGetAdminStatsUseCase {
    async fn execute(&self) -> Result<AdminStats, GetAdminStatsError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Complaints
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreateComplaintUseCase;

#[async_trait]
impl CreateComplaintUseCase for StubCreateComplaintUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _command: CreateComplaintCommand,
    ) -> Result<ComplaintId, CreateComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUserComplaintsUseCase;

#[async_trait]
impl ListUserComplaintsUseCase for StubListUserComplaintsUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ListComplaintsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPendingComplaintsUseCase;

#[async_trait]
impl ListPendingComplaintsUseCase for StubListPendingComplaintsUseCase {
    async fn execute(
        &self,
        _caller: Principal,
    ) -> Result<Vec<ComplaintResult>, ListComplaintsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListLawyerComplaintsUseCase;

#[async_trait]
impl ListLawyerComplaintsUseCase for StubListLawyerComplaintsUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ListComplaintsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptComplaintUseCase;

#[async_trait]
impl AcceptComplaintUseCase for StubAcceptComplaintUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _id: ComplaintId,
        _lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, AcceptComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetComplaintUseCase;

#[async_trait]
impl GetComplaintUseCase for StubGetComplaintUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _id: ComplaintId,
    ) -> Result<ComplaintResult, GetComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateComplaintUseCase;

#[async_trait]
impl UpdateComplaintUseCase for StubUpdateComplaintUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _id: ComplaintId,
        _command: UpdateComplaintCommand,
    ) -> Result<ComplaintResult, UpdateComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteComplaintUseCase;

#[async_trait]
impl DeleteComplaintUseCase for StubDeleteComplaintUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _id: ComplaintId,
    ) -> Result<(), DeleteComplaintError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Messages
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSendMessageUseCase;

#[async_trait]
impl SendMessageUseCase for StubSendMessageUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _command: SendMessageCommand,
    ) -> Result<MessageResult, SendMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetHistoryUseCase;

#[async_trait]
impl GetHistoryUseCase for StubGetHistoryUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _user_id: UserId,
        _lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, GetHistoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditMessageUseCase;

#[async_trait]
impl EditMessageUseCase for StubEditMessageUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _id: MessageId,
        _content: String,
    ) -> Result<MessageResult, EditMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _caller: Principal, _id: MessageId) -> Result<(), DeleteMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListConversationsUseCase;

#[async_trait]
impl ListConversationsUseCase for StubListConversationsUseCase {
    async fn execute(
        &self,
        _caller: Principal,
        _party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
        unimplemented!("Not used in this test")
    }
}
