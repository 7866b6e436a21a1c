pub mod auth;
pub mod chat;
pub mod health_checks;
pub mod places;

pub use health_checks::*;
