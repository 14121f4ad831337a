pub mod document_watcher;
pub mod error;
pub mod repositories;

pub use document_watcher::DocumentWatcher;
pub use error::{Result, StoreError};
pub use repositories::message_repository::MessageRepository;
pub use repositories::user_repository::UserRepository;
