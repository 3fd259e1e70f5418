pub mod field_errors;
pub mod user_validator;
