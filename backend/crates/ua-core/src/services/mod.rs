pub mod user_creation_service;
pub mod user_lookup_service;
pub mod user_query_service;
