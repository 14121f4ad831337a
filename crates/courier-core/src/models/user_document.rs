//! User document - one per registered principal.

use crate::error::{CoreError, Result};
use crate::models::contact_list::filter_by_display_name;
use crate::models::contact_summary::ContactSummary;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's directory document. The identity token (`id`) is immutable once
/// assigned; email uniqueness is enforced by the store schema.
///
/// `contacts` distinguishes an uninitialized list (`None`, the field has
/// never been written) from an initialized-but-empty one (`Some(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactSummary>>,
}

impl UserDocument {
    /// Create a new document with a fresh identity token and no contact list.
    pub fn new(email: String, display_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            photo_url: None,
            email_verified: false,
            last_seen: None,
            contacts: None,
        }
    }

    /// Validate profile fields before registration.
    #[track_caller]
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(CoreError::Validation {
                message: format!("invalid email address: '{}'", self.email),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.display_name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "display name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// The denormalized snapshot embedded in contact lists.
    pub fn summary(&self) -> ContactSummary {
        ContactSummary {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
            email_verified: self.email_verified,
        }
    }

    /// True once the contact list has been written at least once,
    /// even if it is empty.
    pub fn has_contact_list(&self) -> bool {
        self.contacts.is_some()
    }

    /// Membership is computed by email, not by full value.
    pub fn has_contact(&self, email: &str) -> bool {
        self.contacts
            .as_deref()
            .is_some_and(|list| list.iter().any(|c| c.email == email))
    }

    /// Filter the contact list by case-insensitive substring match on the
    /// display name. Returns an empty list when uninitialized.
    pub fn filter_contacts(&self, query: &str) -> Vec<ContactSummary> {
        match self.contacts.as_deref() {
            Some(list) => filter_by_display_name(list, query),
            None => Vec::new(),
        }
    }
}
