use serde::Deserialize;

/// Body of POST /users.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error rather than a JSON error.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}
