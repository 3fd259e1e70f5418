//! Paginated, optionally filtered user listing.

use crate::{ListUsersError, Pagination, UserFilter, UserPage, UserStore};

use std::sync::Arc;

use log::debug;

pub struct UserQueryService {
    store: Arc<dyn UserStore>,
}

impl UserQueryService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// List users one page at a time.
    ///
    /// Pagination input is normalized, never rejected. The count and the
    /// fetch run under the same filter; `count` in the result is the total
    /// number of matches, not the length of `users`.
    pub async fn list_users(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<UserPage, ListUsersError> {
        let pagination = Pagination::from_optional(page, limit);
        let filter = UserFilter::from_search(search.unwrap_or_default());

        let count = self
            .store
            .count(&filter)
            .await
            .map_err(ListUsersError::count_failed)?;

        let users = self
            .store
            .find(&filter, pagination.offset(), pagination.limit)
            .await
            .map_err(ListUsersError::fetch_failed)?;

        debug!(
            "Listed {} of {} users (page={}, limit={}, search={:?})",
            users.len(),
            count,
            pagination.page,
            pagination.limit,
            filter.search()
        );

        Ok(UserPage {
            users,
            count,
            page: pagination.page,
            limit: pagination.limit,
        })
    }
}
