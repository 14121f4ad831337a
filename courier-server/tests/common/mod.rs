#![allow(dead_code)]

//! Test infrastructure for courier-server API tests

use courier_server::{AppState, Metrics};

use courier_core::UserDocument;
use courier_store::{MessageRepository, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/courier-store/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (auth disabled, no metrics exporter)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        users: UserRepository::new(pool.clone()),
        messages: MessageRepository::new(pool),
        jwt_validator: None,
        anonymous_user_id: Uuid::nil(),
        metrics: Metrics::new(),
        prometheus: None,
    }
}

/// Create a test user directly in the store
pub async fn create_test_user(state: &AppState, email: &str, display_name: &str) -> UserDocument {
    let doc = UserDocument::new(email.to_string(), display_name.to_string());
    state
        .users
        .create(&doc)
        .await
        .expect("Failed to create test user");
    doc
}
