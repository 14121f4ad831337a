//! Denormalized snapshot of another user's public profile fields.

use serde::{Deserialize, Serialize};

/// A contact list entry: a copy of selected profile fields taken at
/// add-time. It does not track later edits to the referenced profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub email_verified: bool,
}

impl ContactSummary {
    pub fn new(email: String, display_name: String) -> Self {
        Self {
            email,
            display_name,
            photo_url: None,
            email_verified: false,
        }
    }

    /// Case-insensitive substring match on the display name.
    pub fn display_name_contains(&self, query: &str) -> bool {
        self.display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
