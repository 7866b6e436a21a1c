//! Request-independent application logic. Handlers translate HTTP into calls
//! here; everything below works against the store and connector traits.

pub mod account;
pub mod chat;
pub mod conversation;
pub mod places;
