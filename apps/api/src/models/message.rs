use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Store-native contact message row. `status` stays a plain string here;
/// the API layer owns the `MessageStatus` vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub message_id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
