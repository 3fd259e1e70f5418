mod error;
mod list_users_query;
mod user_id;
