pub mod chat_message;
pub mod contact_list;
pub mod contact_summary;
pub mod user_document;
