use crate::ApiError;

use courier_app::AppError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

#[tokio::test]
async fn test_unauthenticated_returns_401_with_json_body() {
    let error = ApiError::Unauthenticated {
        message: "You need to sign in first".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "You need to sign in first");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "message body cannot be empty".into(),
        field: Some("body".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "body");
}

#[tokio::test]
async fn test_conflict_returns_409_with_duplicate_code() {
    let error = ApiError::Conflict {
        message: "You've already added this user".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "DUPLICATE_CONTACT");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Store operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_unauthenticated_app_error_maps_to_401_with_prompt_text() {
    let api_err: ApiError = AppError::unauthenticated().into();

    match api_err {
        ApiError::Unauthenticated { message, .. } => {
            assert_eq!(message, "You need to sign in first");
        }
        other => panic!("Expected Unauthenticated, got {:?}", other),
    }
}

#[test]
fn test_self_reference_app_error_maps_to_bad_request_with_prompt_text() {
    let api_err: ApiError = AppError::self_reference().into();

    match api_err {
        ApiError::BadRequest { message, .. } => {
            assert_eq!(message, "You can't add yourself");
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_duplicate_contact_app_error_maps_to_conflict_with_prompt_text() {
    let api_err: ApiError = AppError::duplicate_contact("target@example.com").into();

    match api_err {
        ApiError::Conflict { message, .. } => {
            assert_eq!(message, "You've already added this user");
        }
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[test]
fn test_not_found_app_error_maps_to_not_found_with_id() {
    let user_id = Uuid::new_v4();
    let api_err: ApiError = AppError::not_found(user_id).into();

    match api_err {
        ApiError::NotFound { message, .. } => {
            assert!(message.contains(&user_id.to_string()));
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_store_app_error_maps_to_internal_without_backend_detail() {
    let store_err = courier_store::StoreError::corrupt("users.contacts is not valid JSON");
    let api_err: ApiError = AppError::from(store_err).into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Store operation failed");
            assert!(!message.contains("JSON"));
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}
