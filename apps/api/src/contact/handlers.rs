use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::models::{ContactMessage, MessageStatus};
use crate::contact::repo;
use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::{require_non_empty, validate_email};

#[derive(Debug, Deserialize)]
pub struct ContactMessageCreateRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: MessageStatus,
}

#[derive(Debug, Serialize)]
pub struct SubmittedResponse {
    pub message: String,
    pub id: Uuid,
}

/// POST /api/contact/messages
pub async fn submit_message(
    State(state): State<AppState>,
    Json(req): Json<ContactMessageCreateRequest>,
) -> Result<Json<SubmittedResponse>, AppError> {
    require_non_empty("name", &req.name)?;
    require_non_empty("subject", &req.subject)?;
    require_non_empty("message", &req.message)?;
    validate_email("email", &req.email)?;

    let row = repo::insert_message(
        &state.db,
        Uuid::new_v4(),
        &req.name,
        &req.email,
        &req.subject,
        &req.message,
        Utc::now(),
    )
    .await?;

    Ok(Json(SubmittedResponse {
        message: "Message submitted successfully! Thank you for reaching out.".to_string(),
        id: row.message_id,
    }))
}

/// GET /api/contact/messages
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let rows = repo::list_messages(&state.db).await?;
    Ok(Json(rows.into_iter().map(ContactMessage::from).collect()))
}

/// PATCH /api/contact/messages/:id/status
pub async fn update_message_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<StatusCode, AppError> {
    if !repo::update_message_status(&state.db, id, req.status).await? {
        return Err(AppError::NotFound(format!("Message {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_every_field() {
        let body = serde_json::json!({
            "name": "A", "email": "a@b.co", "subject": "S"
        });
        assert!(serde_json::from_value::<ContactMessageCreateRequest>(body).is_err());
    }

    #[test]
    fn test_status_update_request_parses_known_status() {
        let req: StatusUpdateRequest =
            serde_json::from_value(serde_json::json!({ "status": "read" })).unwrap();
        assert_eq!(req.status, MessageStatus::Read);
    }

    #[test]
    fn test_status_update_request_rejects_unknown_status() {
        assert!(serde_json::from_value::<StatusUpdateRequest>(
            serde_json::json!({ "status": "deleted" })
        )
        .is_err());
    }
}
