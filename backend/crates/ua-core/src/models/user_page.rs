use crate::User;

/// One page of a filtered listing plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    /// Total number of matching users, independent of the page size
    pub count: i64,
    pub page: i64,
    pub limit: i64,
}
