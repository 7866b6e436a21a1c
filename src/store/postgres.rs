use super::{ChatStore, StoreError};
use crate::db;
use crate::models::{ChatSession, Message, NewMessage, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Postgres-backed store, one table per record type (see `migrations/`).
#[derive(Clone)]
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ChatStore for PgChatStore {
    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let email = user.email.clone();
        db::user::insert(&self.pool, user).await.map_err(|err| match err {
            sqlx::Error::Database(e) if e.is_unique_violation() => {
                StoreError::Conflict(format!("user {}", email))
            }
            e => StoreError::Database(e),
        })
    }

    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(db::user::fetch(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(db::user::fetch_by_email(&self.pool, email).await?)
    }

    async fn insert_session(&self, session: ChatSession) -> Result<ChatSession, StoreError> {
        Ok(db::chat::insert(&self.pool, session).await?)
    }

    async fn find_session(&self, id: &Uuid) -> Result<Option<ChatSession>, StoreError> {
        Ok(db::chat::fetch(&self.pool, id).await?)
    }

    async fn list_sessions(&self, user_id: &Uuid) -> Result<Vec<ChatSession>, StoreError> {
        Ok(db::chat::fetch_by_user(&self.pool, user_id).await?)
    }

    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError> {
        Ok(db::message::insert(&self.pool, message).await?)
    }

    async fn list_messages(&self, chat_id: &Uuid) -> Result<Vec<Message>, StoreError> {
        Ok(db::message::fetch_by_chat(&self.pool, chat_id).await?)
    }

    async fn delete_session(&self, id: &Uuid) -> Result<bool, StoreError> {
        Ok(db::chat::delete(&self.pool, id).await?)
    }
}
