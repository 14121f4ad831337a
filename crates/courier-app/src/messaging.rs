//! Messaging context. Sender identity comes from the directory; the
//! recipient travels as the contact summary the sender selected.

use crate::directory::UserDirectory;
use crate::error::{AppError, Result};

use courier_core::{ChatMessage, ContactSummary};
use courier_store::MessageRepository;

use std::sync::Arc;

use chrono::Utc;

#[derive(Clone)]
pub struct MessageContext {
    repo: MessageRepository,
    directory: Arc<UserDirectory>,
}

impl MessageContext {
    pub fn new(repo: MessageRepository, directory: Arc<UserDirectory>) -> Self {
        Self { repo, directory }
    }

    /// Persist an outgoing message stamped with the current time.
    pub async fn send_message(&self, recipient: ContactSummary, body: String) -> Result<ChatMessage> {
        let Some(sender_id) = self.directory.current_user().await else {
            return Err(AppError::unauthenticated());
        };

        let message = ChatMessage::new(sender_id, recipient, Utc::now(), body);
        self.repo.insert(&message).await?;
        log::debug!(
            "User {} sent message {} to {}",
            sender_id,
            message.id,
            message.recipient.email
        );
        Ok(message)
    }

    /// Distinct recipients the signed-in user has messaged, most recent
    /// conversation first.
    pub async fn chat_heads(&self) -> Result<Vec<ContactSummary>> {
        let Some(sender_id) = self.directory.current_user().await else {
            return Err(AppError::unauthenticated());
        };
        Ok(self.repo.chat_heads(sender_id).await?)
    }

    /// The signed-in user's thread with one recipient, oldest first.
    pub async fn messages_with(&self, recipient_email: &str) -> Result<Vec<ChatMessage>> {
        let Some(sender_id) = self.directory.current_user().await else {
            return Err(AppError::unauthenticated());
        };
        Ok(self.repo.messages_with(sender_id, recipient_email).await?)
    }

    /// Everything the signed-in user has sent, oldest first.
    pub async fn sent_messages(&self) -> Result<Vec<ChatMessage>> {
        let Some(sender_id) = self.directory.current_user().await else {
            return Err(AppError::unauthenticated());
        };
        Ok(self.repo.list_for_sender(sender_id).await?)
    }
}
