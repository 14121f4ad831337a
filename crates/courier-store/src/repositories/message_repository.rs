//! Chat message repository.
//!
//! Messages store their recipient as a denormalized contact summary so a
//! conversation list can be rendered without joining back to `users`. The
//! recipient email is duplicated into its own column for filtering.

use crate::{Result, StoreError};

use courier_core::{ChatMessage, ContactSummary};

use std::collections::HashSet;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, message: &ChatMessage) -> Result<()> {
        let recipient = serde_json::to_string(&message.recipient)?;

        sqlx::query(
            r#"
                INSERT INTO messages (
                    id, sender_id, recipient, recipient_email, sent_time, body
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(message.id.to_string())
        .bind(message.sender_id.to_string())
        .bind(recipient)
        .bind(&message.recipient.email)
        .bind(message.sent_time.timestamp_millis())
        .bind(&message.body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Every message the user has sent, oldest first.
    pub async fn list_for_sender(&self, sender_id: Uuid) -> Result<Vec<ChatMessage>> {
        let rows = sqlx::query(
            r#"
                SELECT id, sender_id, recipient, sent_time, body
                FROM messages
                WHERE sender_id = ?
                ORDER BY sent_time ASC
            "#,
        )
        .bind(sender_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_message).collect()
    }

    /// Messages the user has sent to one recipient, oldest first.
    pub async fn messages_with(
        &self,
        sender_id: Uuid,
        recipient_email: &str,
    ) -> Result<Vec<ChatMessage>> {
        let rows = sqlx::query(
            r#"
                SELECT id, sender_id, recipient, sent_time, body
                FROM messages
                WHERE sender_id = ? AND recipient_email = ?
                ORDER BY sent_time ASC
            "#,
        )
        .bind(sender_id.to_string())
        .bind(recipient_email)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_message).collect()
    }

    /// Distinct recipients the user has messaged, most recently messaged
    /// first. One entry per recipient email.
    pub async fn chat_heads(&self, sender_id: Uuid) -> Result<Vec<ContactSummary>> {
        let rows = sqlx::query(
            r#"
                SELECT recipient, recipient_email
                FROM messages
                WHERE sender_id = ?
                ORDER BY sent_time DESC
            "#,
        )
        .bind(sender_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut seen = HashSet::new();
        let mut heads = Vec::new();

        for row in &rows {
            let email: String = row.try_get("recipient_email")?;
            if !seen.insert(email) {
                continue;
            }
            let recipient: String = row.try_get("recipient")?;
            heads.push(serde_json::from_str(&recipient)?);
        }

        Ok(heads)
    }
}

fn row_to_message(row: &SqliteRow) -> Result<ChatMessage> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| StoreError::corrupt(format!("invalid UUID in messages.id: {}", e)))?;

    let sender_id: String = row.try_get("sender_id")?;
    let sender_id = Uuid::parse_str(&sender_id)
        .map_err(|e| StoreError::corrupt(format!("invalid UUID in messages.sender_id: {}", e)))?;

    let recipient: String = row.try_get("recipient")?;
    let recipient: ContactSummary = serde_json::from_str(&recipient)?;

    let sent_time: i64 = row.try_get("sent_time")?;
    let sent_time = DateTime::from_timestamp_millis(sent_time)
        .ok_or_else(|| StoreError::corrupt("sent_time out of range"))?;

    Ok(ChatMessage {
        id,
        sender_id,
        recipient,
        sent_time,
        body: row.try_get("body")?,
    })
}
