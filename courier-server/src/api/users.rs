//! User registration and retrieval handlers

use crate::{ApiError, ApiResult, AppState};

use courier_core::UserDocument;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

/// POST /api/users
///
/// Register a user document with a fresh identity token.
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDocument>)> {
    let mut doc = UserDocument::new(request.email, request.display_name);
    doc.photo_url = request.photo_url;
    doc.email_verified = request.email_verified;
    doc.validate()?;

    state.users.create(&doc).await?;
    log::info!("Registered user {} ({})", doc.id, doc.email);

    Ok((StatusCode::CREATED, Json(doc)))
}

/// GET /api/users/{id}
///
/// Fetch a single user document by identity token.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDocument>> {
    let user_id = Uuid::parse_str(&id)?;

    let doc = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(doc))
}
