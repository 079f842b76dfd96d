use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::message::ContactMessageRow;

/// Contact message lifecycle. New messages always start as `Unread`; the
/// status only moves via the explicit status-update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Unread => "unread",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
        }
    }
}

/// Public contact message representation, stripped of the row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        Self {
            id: row.message_id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(MessageStatus::Unread).unwrap(),
            serde_json::json!("unread")
        );
        assert_eq!(
            serde_json::to_value(MessageStatus::Replied).unwrap(),
            serde_json::json!("replied")
        );
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(serde_json::from_value::<MessageStatus>(serde_json::json!("archived")).is_err());
    }

    #[test]
    fn test_as_str_matches_serde_form() {
        for status in [
            MessageStatus::Unread,
            MessageStatus::Read,
            MessageStatus::Replied,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.as_str())
            );
        }
    }

    #[test]
    fn test_message_conversion_strips_row_id() {
        let row = ContactMessageRow {
            id: Uuid::new_v4(),
            message_id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@b.co".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            status: "unread".into(),
            created_at: Utc::now(),
        };
        let public_id = row.message_id;
        let value = serde_json::to_value(ContactMessage::from(row)).unwrap();
        assert_eq!(value["id"], serde_json::json!(public_id));
        assert_eq!(value["status"], "unread");
        assert!(value.get("message_id").is_none());
    }
}
