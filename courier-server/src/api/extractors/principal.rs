//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated principal for a request.
///
/// With authentication enabled, the identity comes from a validated bearer
/// token. With authentication disabled (single-user mode), an `X-User-Id`
/// header is honored and the configured anonymous principal is the fallback.
pub struct Principal(pub Uuid);

impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(ref validator) = state.jwt_validator {
                let header = parts
                    .headers
                    .get("authorization")
                    .and_then(|h| h.to_str().ok());
                let claims = validator.validate_header(header)?;
                let user_id = claims.user_id()?;
                log::debug!("Authenticated principal {}", user_id);
                return Ok(Principal(user_id));
            }

            // Single-user mode: honor X-User-Id, else the configured principal
            #[allow(clippy::collapsible_if)]
            if let Some(header_value) = parts.headers.get("X-User-Id") {
                if let Ok(raw) = header_value.to_str() {
                    if let Ok(user_id) = Uuid::parse_str(raw) {
                        log::debug!("Using principal from X-User-Id header: {}", user_id);
                        return Ok(Principal(user_id));
                    }
                    log::warn!("Invalid UUID in X-User-Id header: {}", raw);
                }
            }

            log::debug!("Using anonymous principal: {}", state.anonymous_user_id);
            Ok(Principal(state.anonymous_user_id))
        }
    }
}
