pub mod auth_config;
pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;
pub mod ui_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use ui_config::UiConfig;


pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4650;
pub const MIN_PORT: u16 = 1024;

pub const DEFAULT_MAX_CONNECTIONS: usize = 256;
pub const MIN_MAX_CONNECTIONS: usize = 1;
pub const MAX_MAX_CONNECTIONS: usize = 10_000;

pub const DEFAULT_DATABASE_FILENAME: &str = "courier.db";

pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

pub const DEFAULT_AUTH_ENABLED: bool = false;
