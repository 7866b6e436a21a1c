use crate::models::ChatSession;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, session: ChatSession) -> Result<ChatSession, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new chat session into the database");
    sqlx::query_as::<_, ChatSession>(
        r#"
        INSERT INTO chat_sessions (id, user_id, title, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, title, created_at
        "#,
    )
    .bind(session.id)
    .bind(session.user_id)
    .bind(session.title)
    .bind(session.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch(pool: &PgPool, id: &Uuid) -> Result<Option<ChatSession>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat session by id.");
    sqlx::query_as::<_, ChatSession>(
        r#"SELECT id, user_id, title, created_at FROM chat_sessions WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &Uuid) -> Result<Vec<ChatSession>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat sessions by user id.");
    sqlx::query_as::<_, ChatSession>(
        r#"
        SELECT id, user_id, title, created_at
        FROM chat_sessions
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
}

/// Delete the session's messages and then the session in one transaction.
#[tracing::instrument(name = "Delete chat session", skip(pool))]
pub async fn delete(pool: &PgPool, id: &Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start transaction: {:?}", err);
        err
    })?;

    let removed = sqlx::query(r#"DELETE FROM messages WHERE chat_id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tracing::debug!("Removed {} messages", removed);

    let result = sqlx::query(r#"DELETE FROM chat_sessions WHERE id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        err
    })?;

    Ok(result.rows_affected() > 0)
}
