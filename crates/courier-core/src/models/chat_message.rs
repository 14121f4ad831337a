//! Chat message entity.

use crate::models::contact_summary::ContactSummary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outgoing chat message. The recipient is addressed by contact summary,
/// not by identity token - messages carry the snapshot the sender selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient: ContactSummary,
    pub sent_time: DateTime<Utc>,
    pub body: String,
}

impl ChatMessage {
    pub fn new(
        sender_id: Uuid,
        recipient: ContactSummary,
        sent_time: DateTime<Utc>,
        body: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            recipient,
            sent_time,
            body,
        }
    }
}
