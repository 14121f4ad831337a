use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED};

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret. Required when auth is enabled.
    pub jwt_secret: Option<String>,
    /// Principal used for all requests when auth is disabled
    /// (single-user/development mode).
    pub anonymous_user_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            anonymous_user_id: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled && self.jwt_secret.is_none() {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required when auth.enabled = true",
            ));
        }

        if let Some(ref secret) = self.jwt_secret
            && secret.len() < 32
        {
            return Err(ConfigError::auth(
                "auth.jwt_secret must be at least 32 bytes",
            ));
        }

        if let Some(ref id) = self.anonymous_user_id
            && Uuid::parse_str(id).is_err()
        {
            return Err(ConfigError::auth(format!(
                "auth.anonymous_user_id is not a valid UUID: '{}'",
                id
            )));
        }

        Ok(())
    }

    /// The principal used when auth is disabled. Falls back to the nil UUID
    /// when unconfigured.
    pub fn anonymous_user_uuid(&self) -> Uuid {
        self.anonymous_user_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
            .unwrap_or(Uuid::nil())
    }
}
