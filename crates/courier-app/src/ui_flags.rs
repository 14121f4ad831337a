//! Interface flag store.
//!
//! An explicit, injectable object rather than process-global state; share
//! it with `Arc` where several components need the same flags.

use courier_config::UiConfig;

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFlag {
    MessageModal,
    SubmitContactMessage,
    DarkMode,
}

#[derive(Debug, Default)]
pub struct UiFlags {
    message_modal: AtomicBool,
    submit_contact_message: AtomicBool,
    dark_mode: AtomicBool,
}

impl UiFlags {
    /// `dark_mode` seeds from configuration; the other flags start cleared.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            message_modal: AtomicBool::new(false),
            submit_contact_message: AtomicBool::new(false),
            dark_mode: AtomicBool::new(dark_mode),
        }
    }

    fn cell(&self, flag: UiFlag) -> &AtomicBool {
        match flag {
            UiFlag::MessageModal => &self.message_modal,
            UiFlag::SubmitContactMessage => &self.submit_contact_message,
            UiFlag::DarkMode => &self.dark_mode,
        }
    }

    pub fn get(&self, flag: UiFlag) -> bool {
        self.cell(flag).load(Ordering::SeqCst)
    }

    /// Flags for a new session, with the theme default taken from the
    /// `[ui]` configuration section.
    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.dark_mode)
    }

    /// Set the flag to `explicit`, or flip it when `explicit` is `None`.
    /// Returns the new value.
    pub fn toggle(&self, flag: UiFlag, explicit: Option<bool>) -> bool {
        let cell = self.cell(flag);
        match explicit {
            Some(value) => {
                cell.store(value, Ordering::SeqCst);
                value
            }
            None => !cell.fetch_xor(true, Ordering::SeqCst),
        }
    }
}
