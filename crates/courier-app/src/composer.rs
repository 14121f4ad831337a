//! Message composer: recipient entry with live suggestions.

use crate::directory::UserDirectory;
use crate::error::{AppError, Result};
use crate::messaging::MessageContext;
use crate::ui_flags::{UiFlag, UiFlags};

use courier_core::{ChatMessage, ContactSummary};

use std::sync::Arc;

use tokio::sync::RwLock;

/// Recipient state while the composer is open. `display_name` tracks the
/// literal typed text; `contact` and `ready` are set only by picking a
/// suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRecipient {
    pub display_name: String,
    pub contact: Option<ContactSummary>,
    pub ready: bool,
}

pub struct MessageComposer {
    directory: Arc<UserDirectory>,
    messages: MessageContext,
    ui: Arc<UiFlags>,
    recipient: RwLock<PendingRecipient>,
    suggestions: RwLock<Vec<ContactSummary>>,
}

impl MessageComposer {
    pub fn new(directory: Arc<UserDirectory>, messages: MessageContext, ui: Arc<UiFlags>) -> Self {
        Self {
            directory,
            messages,
            ui,
            recipient: RwLock::new(PendingRecipient::default()),
            suggestions: RwLock::new(Vec::new()),
        }
    }

    /// A keystroke in the recipient field. Recomputes the suggestion list
    /// from the current snapshot's contacts; the first keystroke against an
    /// uninitialized contact list seeds it instead (errors logged, not
    /// surfaced - suggestions appear once the seeded snapshot arrives).
    pub async fn input_changed(&self, text: &str) {
        {
            let mut recipient = self.recipient.write().await;
            recipient.display_name = text.to_string();
            recipient.contact = None;
            recipient.ready = false;
        }
        self.ui.toggle(UiFlag::SubmitContactMessage, Some(false));

        let snapshot = self.directory.current_snapshot().await;
        let suggestions = match snapshot {
            Some(doc) if doc.has_contact_list() => doc.filter_contacts(text),
            Some(_) => {
                if let Err(e) = self.directory.initialize_contacts().await {
                    log::error!("Failed to initialize contact list: {}", e);
                }
                Vec::new()
            }
            None => Vec::new(),
        };

        *self.suggestions.write().await = suggestions;
    }

    /// Pick a suggestion by email. An email not in the current suggestion
    /// list is ignored.
    pub async fn select_suggestion(&self, email: &str) {
        let selected = {
            let suggestions = self.suggestions.read().await;
            suggestions.iter().find(|c| c.email == email).cloned()
        };

        let Some(contact) = selected else {
            log::debug!("Ignoring selection of unknown suggestion {}", email);
            return;
        };

        {
            let mut recipient = self.recipient.write().await;
            recipient.display_name = contact.display_name.clone();
            recipient.contact = Some(contact);
            recipient.ready = true;
        }
        self.ui.toggle(UiFlag::SubmitContactMessage, Some(true));
        self.suggestions.write().await.clear();
    }

    /// Send the composed message, then reset the recipient state and close
    /// the modal.
    pub async fn submit(&self, body: &str) -> Result<ChatMessage> {
        let pending = self.recipient.read().await.clone();

        if pending.display_name.trim().is_empty() {
            return Err(AppError::validation(
                "recipient name cannot be empty",
                "recipient",
            ));
        }
        if body.trim().is_empty() {
            return Err(AppError::validation("message body cannot be empty", "body"));
        }
        let Some(contact) = pending.contact else {
            return Err(AppError::validation(
                "recipient must be picked from suggestions",
                "recipient",
            ));
        };

        let message = self.messages.send_message(contact, body.to_string()).await?;

        *self.recipient.write().await = PendingRecipient::default();
        self.suggestions.write().await.clear();
        self.ui.toggle(UiFlag::SubmitContactMessage, Some(false));
        self.ui.toggle(UiFlag::MessageModal, Some(false));

        Ok(message)
    }

    pub async fn recipient(&self) -> PendingRecipient {
        self.recipient.read().await.clone()
    }

    pub async fn suggestions(&self) -> Vec<ContactSummary> {
        self.suggestions.read().await.clone()
    }
}
