use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Reply {
    pub chat_id: Uuid,
    pub reply: String,
}

/// Entry of the chat list.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub chat_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::ChatSession> for Summary {
    fn from(session: models::ChatSession) -> Self {
        Self {
            chat_id: session.id,
            title: session.title,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Turn {
    pub role: models::Role,
    pub content: String,
}

impl From<models::Message> for Turn {
    fn from(message: models::Message) -> Self {
        Self {
            role: message.role,
            content: message.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct History {
    pub chat_id: Uuid,
    pub messages: Vec<Turn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}
