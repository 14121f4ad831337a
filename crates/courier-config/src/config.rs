use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
    UiConfig,
};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for COURIER_CONFIG_DIR env var, else use ./.courier/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply COURIER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Self::warn_legacy_config();
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: COURIER_CONFIG_DIR env var > ./.courier/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("COURIER_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".courier"))
    }

    /// A config file in the home directory is not read; point users at the
    /// per-project location instead.
    fn warn_legacy_config() {
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".courier").join("config.toml");
            if legacy.exists() {
                warn!(
                    "Found {} but home-directory configs are not loaded; \
                     set COURIER_CONFIG_DIR or use ./.courier/config.toml",
                    legacy.display()
                );
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.auth.jwt_secret.is_some() {
                "HS256"
            } else {
                "none"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );

        info!("  ui: dark_mode={}", self.ui.dark_mode);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("COURIER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("COURIER_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "COURIER_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("COURIER_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("COURIER_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("COURIER_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "COURIER_AUTH_ANONYMOUS_USER_ID",
            &mut self.auth.anonymous_user_id,
        );

        // Logging
        Self::apply_env_parse("COURIER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("COURIER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("COURIER_LOG_FILE", &mut self.logging.file);

        // UI defaults
        Self::apply_env_bool("COURIER_UI_DARK_MODE", &mut self.ui.dark_mode);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
