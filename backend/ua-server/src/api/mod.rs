pub mod error;
pub mod error_codes;
pub mod users;
