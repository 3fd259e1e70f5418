pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::create_user_error::CreateUserError;
pub use error::get_user_error::GetUserError;
pub use error::list_users_error::ListUsersError;
pub use error::store_error::{StoreError, StoreResult};
pub use models::new_user::NewUser;
pub use models::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, Pagination};
pub use models::user::{User, UserId};
pub use models::user_filter::{UserFilter, fold_case};
pub use models::user_page::UserPage;
pub use services::user_creation_service::UserCreationService;
pub use services::user_lookup_service::UserLookupService;
pub use services::user_query_service::UserQueryService;
pub use store::user_store::UserStore;
pub use validation::field_errors::FieldErrors;
pub use validation::user_validator::{
    EMAIL_MAX_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS, is_valid_email, validate_new_user,
};
