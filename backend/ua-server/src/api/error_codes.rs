//! Machine-readable `code` values carried by error responses.

pub const INVALID_JSON: &str = "INVALID_JSON";
pub const INVALID_USER_ID: &str = "INVALID_USER_ID";
pub const EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const USER_COUNT_ERROR: &str = "USER_COUNT_ERROR";
pub const USER_FETCH_ERROR: &str = "USER_FETCH_ERROR";
pub const USER_LOOKUP_ERROR: &str = "USER_LOOKUP_ERROR";
pub const USER_CREATE_ERROR: &str = "USER_CREATE_ERROR";
