pub mod contacts;
pub mod error;
pub mod extractors;
pub mod messages;
pub mod resolve;
pub mod users;
