use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            image,
            created_at: Utc::now(),
        }
    }
}
