//! User REST API handlers

use crate::api::error_codes::{INVALID_JSON, INVALID_USER_ID};
use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, CreateUserResponse, ListUsersQuery,
    UserResponse, UsersListResponse,
};

use ua_core::{UserCreationService, UserId, UserLookupService, UserQueryService};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use log::warn;

// =============================================================================
// Handlers
// =============================================================================

/// GET /users
///
/// List users one page at a time, optionally filtered by `search`.
/// Never rejects its query string: anything unusable falls back to defaults.
pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<UsersListResponse>> {
    let query = match params {
        Ok(Query(pairs)) => ListUsersQuery::from_pairs(pairs),
        Err(rejection) => {
            warn!("Ignoring unreadable query string: {}", rejection.body_text());
            ListUsersQuery::default()
        }
    };

    let service = UserQueryService::new(state.store.clone());
    let page = service
        .list_users(query.page(), query.limit(), query.search())
        .await?;

    Ok(Json(page.into()))
}

/// POST /users
///
/// Create a user. Responds 201 with the stored user.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::bad_request(INVALID_JSON, "Invalid request format", rejection.body_text())
    })?;

    let service = UserCreationService::new(state.store.clone());
    let user = service
        .create_user(request.email.as_deref(), request.name.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            user: user.into(),
            token: None,
        }),
    ))
}

/// GET /users/{id}
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = id
        .ok()
        .and_then(|Path(id)| parse_user_id(&id))
        .ok_or_else(|| {
            ApiError::bad_request(
                INVALID_USER_ID,
                "Invalid user ID",
                "User ID must be a valid number",
            )
        })?;

    let service = UserLookupService::new(state.store.clone());
    let user = service.get_user(user_id).await?;

    Ok(Json(user.into()))
}

/// Plain decimal digits only; no sign, no whitespace, must fit a `UserId`.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
