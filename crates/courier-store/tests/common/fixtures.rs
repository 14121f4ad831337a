use courier_core::{ChatMessage, ContactSummary, UserDocument};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn create_test_document(email: &str, display_name: &str) -> UserDocument {
    let mut doc = UserDocument::new(email.to_string(), display_name.to_string());
    doc.email_verified = true;
    doc
}

pub fn create_test_contact(email: &str, display_name: &str) -> ContactSummary {
    ContactSummary {
        email: email.to_string(),
        display_name: display_name.to_string(),
        photo_url: None,
        email_verified: true,
    }
}

pub fn create_test_message(
    sender_id: Uuid,
    recipient: ContactSummary,
    sent_time: DateTime<Utc>,
    body: &str,
) -> ChatMessage {
    ChatMessage::new(sender_id, recipient, sent_time, body.to_string())
}
