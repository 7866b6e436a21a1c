//! Persistence of users, chat sessions and their messages.
//!
//! The store answers by id only. Ownership is checked by callers so that a missing
//! session and somebody else's session look the same from the outside.

mod memory;
mod postgres;

pub use memory::InMemoryChatStore;
pub use postgres::PgChatStore;

use crate::models::{ChatSession, Message, NewMessage, User};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0} already exists")]
    Conflict(String),
}

#[async_trait::async_trait]
pub trait ChatStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;

    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn insert_session(&self, session: ChatSession) -> Result<ChatSession, StoreError>;

    async fn find_session(&self, id: &Uuid) -> Result<Option<ChatSession>, StoreError>;

    /// Sessions of `user_id`, newest first.
    async fn list_sessions(&self, user_id: &Uuid) -> Result<Vec<ChatSession>, StoreError>;

    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError>;

    /// Messages of a session, oldest first.
    async fn list_messages(&self, chat_id: &Uuid) -> Result<Vec<Message>, StoreError>;

    /// Removes the session's messages, then the session. Returns false when
    /// the session did not exist.
    async fn delete_session(&self, id: &Uuid) -> Result<bool, StoreError>;
}
