use std::panic::Location;

use courier_store::StoreError;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not signed in {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Contact already present: {email} {location}")]
    DuplicateContact {
        email: String,
        location: ErrorLocation,
    },

    #[error("Cannot add yourself as a contact {location}")]
    SelfReference { location: ErrorLocation },

    #[error("User not found: {user_id} {location}")]
    NotFound {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Validation failed on {field}: {message} {location}")]
    Validation {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_contact<S: Into<String>>(email: S) -> Self {
        Self::DuplicateContact {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn self_reference() -> Self {
        Self::SelfReference {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(user_id: Uuid) -> Self {
        Self::NotFound {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AppError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
