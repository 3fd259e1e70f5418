pub mod create_user_error;
pub mod get_user_error;
pub mod list_users_error;
pub mod store_error;
