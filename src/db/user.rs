use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, user: models::User) -> Result<models::User, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (id, email, name, image, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, name, image, created_at
        "#,
    )
    .bind(user.id)
    .bind(user.email)
    .bind(user.name)
    .bind(user.image)
    .bind(user.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch(pool: &PgPool, id: &Uuid) -> Result<Option<models::User>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch user by id.");
    sqlx::query_as::<_, models::User>(
        r#"SELECT id, email, name, image, created_at FROM users WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<models::User>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch user by email.");
    sqlx::query_as::<_, models::User>(
        r#"SELECT id, email, name, image, created_at FROM users WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}
