use super::{ChatStore, StoreError};
use crate::models::{ChatSession, Message, NewMessage, User};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<ChatSession>,
    messages: Vec<Message>,
    next_message_id: i64,
}

/// Process-local store with the same ordering rules as the Postgres one.
/// Insertion order breaks ties between equal timestamps.
#[derive(Default)]
pub struct InMemoryChatStore {
    tables: RwLock<Tables>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn message_count(&self) -> usize {
        self.tables.read().await.messages.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

#[async_trait::async_trait]
impl ChatStore for InMemoryChatStore {
    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!("user {}", user.email)));
        }
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_session(&self, session: ChatSession) -> Result<ChatSession, StoreError> {
        self.tables.write().await.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_session(&self, id: &Uuid) -> Result<Option<ChatSession>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.sessions.iter().find(|s| &s.id == id).cloned())
    }

    async fn list_sessions(&self, user_id: &Uuid) -> Result<Vec<ChatSession>, StoreError> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<ChatSession> = tables
            .sessions
            .iter()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect();
        // same order as the postgres query: newest first, ties by id
        sessions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(sessions)
    }

    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError> {
        let mut tables = self.tables.write().await;
        tables.next_message_id += 1;
        let stored = Message {
            id: tables.next_message_id,
            chat_id: message.chat_id,
            role: message.role,
            content: message.content,
            created_at: message.created_at,
        };
        tables.messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self, chat_id: &Uuid) -> Result<Vec<Message>, StoreError> {
        let tables = self.tables.read().await;
        let mut messages: Vec<Message> = tables
            .messages
            .iter()
            .filter(|m| &m.chat_id == chat_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn delete_session(&self, id: &Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.messages.retain(|m| &m.chat_id != id);
        let before = tables.sessions.len();
        tables.sessions.retain(|s| &s.id != id);
        Ok(tables.sessions.len() != before)
    }
}
