use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl From<uuid::Error> for CoreError {
    #[track_caller]
    fn from(source: uuid::Error) -> Self {
        Self::Uuid {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
