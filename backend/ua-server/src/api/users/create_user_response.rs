use crate::UserResponse;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    /// Reserved for an auth token; never issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
