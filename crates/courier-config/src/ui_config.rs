use serde::Deserialize;

/// Defaults for the client-facing UI flag store. The original application
/// persisted the theme choice per browser; here it is a server-side default
/// handed to each new session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
}
