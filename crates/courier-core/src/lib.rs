pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::chat_message::ChatMessage;
pub use models::contact_list::{filter_by_display_name, merge_union};
pub use models::contact_summary::ContactSummary;
pub use models::user_document::UserDocument;

#[cfg(test)]
mod tests;
