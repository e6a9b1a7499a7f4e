pub mod admin;
pub mod auth;
pub mod complaint;
pub mod lawyer;
pub mod media;
pub mod message;
pub mod user;
