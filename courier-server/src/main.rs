use courier_server::{AppState, Metrics, build_router, logger};

use courier_auth::JwtValidator;
use courier_store::{MessageRepository, UserRepository};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = courier_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = courier_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting courier-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/courier-store/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        match config.auth.jwt_secret {
            Some(ref secret) => {
                info!("JWT: HS256 authentication enabled");
                Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes())))
            }
            None => unreachable!("validate() ensures jwt_secret when auth.enabled"),
        }
    } else {
        warn!("Authentication DISABLED - running in single-user mode");
        None
    };

    // Install Prometheus exporter
    let prometheus = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Failed to install metrics recorder: {}", e);
            None
        }
    };

    // Build application state
    let app_state = AppState {
        users: UserRepository::new(pool.clone()),
        messages: MessageRepository::new(pool),
        jwt_validator,
        anonymous_user_id: config.auth.anonymous_user_uuid(),
        metrics: Metrics::new(),
        prometheus,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
