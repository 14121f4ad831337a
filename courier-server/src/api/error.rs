//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use courier_app::AppError;
use courier_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "DUPLICATE_CONTACT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid credentials (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate contact addition (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE_CONTACT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert application errors to API errors.
///
/// Validation failures carry the same one-shot prompt text a client-side
/// attempt would surface; store failures become a generic 500 with no
/// backend detail.
impl From<AppError> for ApiError {
    #[track_caller]
    fn from(e: AppError) -> Self {
        match e {
            AppError::Unauthenticated { .. } => ApiError::Unauthenticated {
                message: courier_app::PROMPT_SIGN_IN_REQUIRED.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AppError::SelfReference { .. } => ApiError::BadRequest {
                message: courier_app::PROMPT_SELF_REFERENCE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AppError::DuplicateContact { .. } => ApiError::Conflict {
                message: courier_app::PROMPT_DUPLICATE_CONTACT.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AppError::NotFound { user_id, .. } => ApiError::NotFound {
                message: format!("User {} not found", user_id),
                location: ErrorLocation::from(Location::caller()),
            },
            AppError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location: ErrorLocation::from(Location::caller()),
            },
            AppError::Store { source, .. } => {
                log::error!("Store error: {}", source);
                ApiError::Internal {
                    message: "Store operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        // Don't expose internal store details to clients
        log::error!("Store error: {}", e);
        ApiError::Internal {
            message: "Store operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert profile validation errors to API errors
impl From<courier_core::CoreError> for ApiError {
    #[track_caller]
    fn from(e: courier_core::CoreError) -> Self {
        ApiError::Validation {
            message: e.to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert token validation errors to API errors
impl From<courier_auth::AuthError> for ApiError {
    #[track_caller]
    fn from(e: courier_auth::AuthError) -> Self {
        log::warn!("Authentication failed: {}", e);
        ApiError::Unauthenticated {
            message: "Invalid or missing credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
