//! Data store gateway for the `users` relation.
//!
//! Implementations apply soft-deletion transparently: rows with a
//! `deleted_at` timestamp are invisible to every method.

use crate::{NewUser, StoreResult, User, UserFilter, UserId};

use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Count users matching the filter
    async fn count(&self, filter: &UserFilter) -> StoreResult<i64>;

    /// Fetch at most `limit` matching users starting at `offset`, ordered by id
    async fn find(&self, filter: &UserFilter, offset: i64, limit: i64) -> StoreResult<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Persist a new user. The store assigns id and timestamps.
    /// A uniqueness collision on email must surface as `StoreError::UniqueViolation`.
    async fn insert(&self, user: &NewUser) -> StoreResult<User>;

    /// Cheap round trip proving the store is reachable
    async fn health_check(&self) -> StoreResult<()>;
}
