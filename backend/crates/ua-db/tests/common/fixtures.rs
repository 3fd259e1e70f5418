use ua_core::{NewUser, User, validate_new_user};
use ua_db::UserRepository;

use chrono::Utc;
use sqlx::SqlitePool;

pub fn new_user(email: &str, name: &str) -> NewUser {
    validate_new_user(Some(email), Some(name)).expect("fixture input must be valid")
}

pub async fn insert_user(repo: &UserRepository, email: &str, name: &str) -> User {
    repo.create(&new_user(email, name))
        .await
        .expect("Failed to insert user")
}

/// Marks a user deleted directly in SQL; the API has no delete operation.
pub async fn soft_delete_user(pool: &SqlitePool, id: u32) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("UPDATE users SET deleted_at = ? WHERE id = ?")
        .bind(Utc::now().timestamp())
        .bind(i64::from(id))
        .execute(pool)
        .await
        .expect("Failed to soft delete user");
}
