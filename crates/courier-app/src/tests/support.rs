use crate::UserDirectory;

use courier_core::UserDocument;
use courier_store::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use tempfile::TempDir;

pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../courier-store/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed pool with the server's connection options: several
/// connections, WAL, and a busy timeout. Contention behaves as it does in
/// production here, unlike the single-connection in-memory pool.
pub async fn setup_server_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("courier.db"))
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../courier-store/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}

pub async fn seed_user(pool: &SqlitePool, email: &str, display_name: &str) -> UserDocument {
    let doc = UserDocument::new(email.to_string(), display_name.to_string());
    UserRepository::new(pool.clone())
        .create(&doc)
        .await
        .expect("Failed to seed user");
    doc
}

pub fn directory(pool: &SqlitePool) -> Arc<UserDirectory> {
    Arc::new(UserDirectory::new(UserRepository::new(pool.clone())))
}

/// Polls until the directory's cached snapshot satisfies `pred`. The watch
/// task applies snapshots asynchronously, so tests wait instead of racing.
pub async fn wait_for_snapshot<F>(dir: &UserDirectory, pred: F)
where
    F: Fn(&Option<UserDocument>) -> bool,
{
    for _ in 0..200 {
        let snapshot = dir.current_snapshot().await;
        if pred(&snapshot) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("Snapshot did not reach the expected state in time");
}
