//! Contact addition handler

use crate::{ApiError, ApiResult, AppState, Principal};

use courier_app::UserDirectory;
use courier_core::UserDocument;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddContactRequest {
    pub target_id: Uuid,
}

/// POST /api/contacts
///
/// Runs the contact-add flow as the authenticated principal and returns
/// the committed user document. Validation failures map to 401/409/400/404
/// with the same prompt text a client-side attempt would show.
pub async fn add_contact(
    State(state): State<AppState>,
    Principal(user_id): Principal,
    Json(request): Json<AddContactRequest>,
) -> ApiResult<(StatusCode, Json<UserDocument>)> {
    let directory = UserDirectory::new(state.users.clone());
    directory.set_current_user(user_id).await?;
    directory.add_to_contacts(request.target_id).await?;

    state.metrics.contact_added();

    let doc = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok((StatusCode::OK, Json(doc)))
}
