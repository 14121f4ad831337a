//! Email-to-identity resolution
//!
//! Clients sign in with an email; the identity token is resolved once per
//! session and used for everything afterwards.

use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub user_id: Uuid,
}

/// GET /api/resolve?email=
pub async fn resolve_email(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<Json<ResolveResponse>> {
    let user_id = state
        .users
        .find_id_by_email(&query.email)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No user registered as {}", query.email),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ResolveResponse { user_id }))
}
