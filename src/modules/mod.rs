pub mod auth;
pub mod invites;
pub mod pages;
pub mod tutor;
pub mod webhook;

pub use self::invites::model::User;
pub use self::tutor::model::TutorRequest;
