//! Data access for the contact_messages table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::contact::models::MessageStatus;
use crate::models::message::ContactMessageRow;

pub async fn insert_message(
    pool: &PgPool,
    message_id: Uuid,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    created_at: DateTime<Utc>,
) -> Result<ContactMessageRow, sqlx::Error> {
    sqlx::query_as::<_, ContactMessageRow>(
        r#"
        INSERT INTO contact_messages
            (message_id, name, email, subject, message, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(message_id)
    .bind(name)
    .bind(email)
    .bind(subject)
    .bind(message)
    .bind(MessageStatus::Unread.as_str())
    .bind(created_at)
    .fetch_one(pool)
    .await
}

pub async fn list_messages(pool: &PgPool) -> Result<Vec<ContactMessageRow>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessageRow>(
        "SELECT * FROM contact_messages ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Sets the status by public id; reports whether a record was modified.
pub async fn update_message_status(
    pool: &PgPool,
    message_id: Uuid,
    status: MessageStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE contact_messages SET status = $1 WHERE message_id = $2")
        .bind(status.as_str())
        .bind(message_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
