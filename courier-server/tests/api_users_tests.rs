mod common;

use common::{create_test_app_state, create_test_user};

use courier_server::{ApiError, RegisterUserRequest, get_user, register_user};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_registration_when_posted_then_created_and_retrievable() {
    let state = create_test_app_state().await;

    let request = RegisterUserRequest {
        email: "alice@example.com".to_string(),
        display_name: "Alice".to_string(),
        photo_url: None,
        email_verified: true,
    };

    let (status, Json(created)) = register_user(State(state.clone()), Json(request))
        .await
        .unwrap();

    assert_that!(status, eq(StatusCode::CREATED));
    assert_that!(created.email, eq("alice@example.com"));
    assert_that!(created.contacts, none());

    let Json(fetched) = get_user(State(state), Path(created.id.to_string()))
        .await
        .unwrap();
    assert_that!(fetched, eq(&created));
}

#[tokio::test]
async fn given_invalid_email_when_registering_then_validation_error() {
    let state = create_test_app_state().await;

    let request = RegisterUserRequest {
        email: "not-an-email".to_string(),
        display_name: "Alice".to_string(),
        photo_url: None,
        email_verified: false,
    };

    let result = register_user(State(state), Json(request)).await;

    assert_that!(result, err(matches_pattern!(ApiError::Validation { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_not_found() {
    let state = create_test_app_state().await;

    let result = get_user(State(state), Path(Uuid::new_v4().to_string())).await;

    assert_that!(result, err(matches_pattern!(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn given_malformed_id_when_fetching_then_validation_error() {
    let state = create_test_app_state().await;

    let result = get_user(State(state), Path("not-a-uuid".to_string())).await;

    assert_that!(result, err(matches_pattern!(ApiError::Validation { .. })));
}

#[tokio::test]
async fn given_registered_user_when_registering_same_email_then_internal_error() {
    let state = create_test_app_state().await;
    create_test_user(&state, "alice@example.com", "Alice").await;

    let request = RegisterUserRequest {
        email: "alice@example.com".to_string(),
        display_name: "Other Alice".to_string(),
        photo_url: None,
        email_verified: false,
    };

    let result = register_user(State(state), Json(request)).await;

    assert_that!(result, err(anything()));
}
