//! User creation with email uniqueness.
//!
//! The pre-check gives the common duplicate case a cheap early exit. The
//! store's unique index is what actually enforces the invariant, so a
//! collision reported by `insert` maps to the same conflict error.

use crate::{CreateUserError, User, UserStore, validate_new_user};

use std::sync::Arc;

use log::info;

pub struct UserCreationService {
    store: Arc<dyn UserStore>,
}

impl UserCreationService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn create_user(
        &self,
        email: Option<&str>,
        name: Option<&str>,
    ) -> Result<User, CreateUserError> {
        let new_user = validate_new_user(email, name).map_err(CreateUserError::validation)?;

        let existing = self
            .store
            .find_by_email(new_user.email())
            .await
            .map_err(CreateUserError::lookup_failed)?;

        if existing.is_some() {
            return Err(CreateUserError::email_exists(new_user.email()));
        }

        let user = self.store.insert(&new_user).await.map_err(|e| {
            if e.is_unique_violation() {
                CreateUserError::email_exists(new_user.email())
            } else {
                CreateUserError::create_failed(e)
            }
        })?;

        info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }
}
