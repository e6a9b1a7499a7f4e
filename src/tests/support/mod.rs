pub mod app_state_builder;
pub mod auth_helper;
pub mod complaint_fixtures;
pub mod fakes;
pub mod lawyer_fixtures;
pub mod message_fixtures;
pub mod multipart;
pub mod stubs;
pub mod user_fixtures;
