pub mod new_user;
pub mod pagination;
pub mod user;
pub mod user_filter;
pub mod user_page;
