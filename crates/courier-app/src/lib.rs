pub mod composer;
pub mod directory;
pub mod error;
pub mod messaging;
pub mod ui_flags;

pub use composer::{MessageComposer, PendingRecipient};
pub use directory::{
    PROMPT_DUPLICATE_CONTACT, PROMPT_SELF_REFERENCE, PROMPT_SIGN_IN_REQUIRED, UserDirectory,
};
pub use error::{AppError, Result};
pub use messaging::MessageContext;
pub use ui_flags::{UiFlag, UiFlags};

#[cfg(test)]
mod tests;
