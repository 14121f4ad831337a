//! Chat message handlers

use crate::{ApiResult, AppState, Principal};

use courier_core::{ChatMessage, ContactSummary};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub recipient: ContactSummary,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    /// Restrict to the thread with one recipient email
    pub with: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatHeadListResponse {
    pub chats: Vec<ContactSummary>,
}

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    Principal(user_id): Principal,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<ChatMessage>)> {
    if request.body.trim().is_empty() {
        return Err(courier_app::AppError::validation("message body cannot be empty", "body").into());
    }

    let message = ChatMessage::new(user_id, request.recipient, Utc::now(), request.body);
    state.messages.insert(&message).await?;
    state.metrics.message_sent();

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages[?with=email]
///
/// Everything the principal has sent, oldest first; with `?with=` only the
/// thread with that recipient.
pub async fn list_messages(
    State(state): State<AppState>,
    Principal(user_id): Principal,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<MessageListResponse>> {
    let messages = match query.with {
        Some(ref email) => state.messages.messages_with(user_id, email).await?,
        None => state.messages.list_for_sender(user_id).await?,
    };

    Ok(Json(MessageListResponse { messages }))
}

/// GET /api/chats
///
/// Distinct recipients the principal has messaged, most recent first.
pub async fn list_chat_heads(
    State(state): State<AppState>,
    Principal(user_id): Principal,
) -> ApiResult<Json<ChatHeadListResponse>> {
    let chats = state.messages.chat_heads(user_id).await?;
    Ok(Json(ChatHeadListResponse { chats }))
}
