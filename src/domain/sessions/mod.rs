//! Sessions

pub mod models;
pub mod service;
pub mod session;

pub use models::{NewUserDocument, UserDocument, UserId};
pub use service::SessionSync;
pub use session::Session;
