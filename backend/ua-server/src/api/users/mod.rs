pub mod create_user_request;
pub mod create_user_response;
pub mod list_users_query;
pub mod user_response;
pub mod users;
pub mod users_list_response;
