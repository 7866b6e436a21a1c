use crate::models::{Message, NewMessage};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, message: NewMessage) -> Result<Message, sqlx::Error> {
    let query_span = tracing::info_span!("Saving chat message into the database", role = %message.role);
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (chat_id, role, content, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, chat_id, role, content, created_at
        "#,
    )
    .bind(message.chat_id)
    .bind(message.role)
    .bind(message.content)
    .bind(message.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch_by_chat(pool: &PgPool, chat_id: &Uuid) -> Result<Vec<Message>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat messages.");
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, chat_id, role, content, created_at
        FROM messages
        WHERE chat_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(chat_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
}
