pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    error::{ErrorResponse, ValidationErrorResponse},
    users::{
        create_user_request::CreateUserRequest,
        create_user_response::CreateUserResponse,
        list_users_query::ListUsersQuery,
        user_response::UserResponse,
        users::{create_user, get_user, list_users},
        users_list_response::UsersListResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
