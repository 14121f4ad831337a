pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod ws;

#[cfg(test)]
mod tests;

pub use api::{
    contacts::{AddContactRequest, add_contact},
    error::{ApiError, Result as ApiResult},
    extractors::principal::Principal,
    messages::{
        ChatHeadListResponse, ListMessagesQuery, MessageListResponse, SendMessageRequest,
        list_chat_heads, list_messages, send_message,
    },
    resolve::{ResolveQuery, ResolveResponse, resolve_email},
    users::{RegisterUserRequest, get_user, register_user},
};
pub use error::{Result as ServerResult, ServerError};
pub use metrics::Metrics;
pub use routes::build_router;
pub use state::AppState;
