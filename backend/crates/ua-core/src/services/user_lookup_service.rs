use crate::{GetUserError, User, UserId, UserStore};

use std::sync::Arc;

pub struct UserLookupService {
    store: Arc<dyn UserStore>,
}

impl UserLookupService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Fetch a single non-deleted user by id
    pub async fn get_user(&self, id: UserId) -> Result<User, GetUserError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(GetUserError::fetch_failed)?
            .ok_or_else(|| GetUserError::not_found(id))
    }
}
