use crate::ApiError;

use ua_core::{
    CreateUserError, FieldErrors, GetUserError, ListUsersError, StoreError, validate_new_user,
};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_bad_request_returns_400_with_code_and_details() {
    let error = ApiError::bad_request("INVALID_JSON", "Invalid request format", "EOF");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request format");
    assert_eq!(json["code"], "INVALID_JSON");
    assert_eq!(json["details"], "EOF");
}

#[tokio::test]
async fn test_validation_error_returns_field_map_without_code() {
    let errors = validate_new_user(Some("not-an-email"), Some("A")).unwrap_err();
    let error = ApiError::from(CreateUserError::validation(errors));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(
        json["details"]["email"],
        "email must be a valid email address"
    );
    assert_eq!(
        json["details"]["name"],
        "name must be between 2 and 100 characters"
    );
    assert!(json.get("code").is_none());
}

#[tokio::test]
async fn test_email_exists_returns_409() {
    let error = ApiError::from(CreateUserError::email_exists("a@b.com"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "EMAIL_EXISTS");
    assert_eq!(json["error"], "Email already exists");
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = ApiError::from(GetUserError::not_found(7));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "USER_NOT_FOUND");
    assert_eq!(json["details"], "No user exists with the provided ID");
}

#[tokio::test]
async fn test_count_and_fetch_failures_have_distinct_codes() {
    let count = ApiError::from(ListUsersError::count_failed(StoreError::query("boom")));
    let fetch = ApiError::from(ListUsersError::fetch_failed(StoreError::query("boom")));

    let (count_status, count_json) = body_json(count).await;
    let (fetch_status, fetch_json) = body_json(fetch).await;

    assert_eq!(count_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fetch_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(count_json["code"], "USER_COUNT_ERROR");
    assert_eq!(fetch_json["code"], "USER_FETCH_ERROR");
}

#[tokio::test]
async fn test_internal_error_does_not_leak_store_message() {
    let store_error = StoreError::unavailable("disk I/O error at /var/lib/secret.db");
    let error = ApiError::from(CreateUserError::create_failed(store_error));

    let (_, json) = body_json(error).await;

    assert_eq!(json["code"], "USER_CREATE_ERROR");
    assert_eq!(json["details"], "Database unavailable");
    assert!(!json.to_string().contains("secret.db"));
}

#[tokio::test]
async fn test_lookup_failure_maps_to_lookup_code() {
    let error = ApiError::from(CreateUserError::lookup_failed(StoreError::query("boom")));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "USER_LOOKUP_ERROR");
    assert_eq!(json["details"], "Database query failed");
}

#[test]
fn test_empty_field_errors_serialize_as_empty_object() {
    let json = serde_json::to_value(FieldErrors::new()).unwrap();

    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn test_internal_error_message_carries_store_error_for_logging() {
    let error = ApiError::from(ListUsersError::count_failed(StoreError::query(
        "no such table: users",
    )));

    let logged = error.to_string();

    assert!(logged.contains("USER_COUNT_ERROR"));
    assert!(logged.contains("no such table: users"));
    assert!(std::error::Error::source(&error).is_some());
}
