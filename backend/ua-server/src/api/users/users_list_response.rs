use crate::UserResponse;

use ua_core::UserPage;

use serde::Serialize;

/// Pagination envelope for GET /users
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
    /// Total matches across all pages
    pub count: i64,
    pub page: i64,
    pub limit: i64,
}

impl From<UserPage> for UsersListResponse {
    fn from(page: UserPage) -> Self {
        Self {
            users: page.users.into_iter().map(UserResponse::from).collect(),
            count: page.count,
            page: page.page,
            limit: page.limit,
        }
    }
}
