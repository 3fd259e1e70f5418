#![allow(dead_code)]

//! Test infrastructure for ua-server API tests

use ua_core::{
    NewUser, StoreError, StoreResult, User, UserFilter, UserId, UserStore, fold_case,
};
use ua_db::{Database, UserRepository};
use ua_server::AppState;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    Database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState backed by a fresh in-memory database
pub async fn create_test_app_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    let store = Arc::new(UserRepository::new(pool.clone()));
    (AppState::new(store), pool)
}

/// Insert a user directly, bypassing the API
pub async fn create_test_user(pool: &SqlitePool, email: &str, name: &str) -> UserId {
    let now = chrono::Utc::now().timestamp();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, name, email_folded, name_folded, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(email)
    .bind(name)
    .bind(fold_case(email))
    .bind(fold_case(name))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .expect("Failed to create test user");

    UserId::try_from(id).expect("id out of range")
}

pub async fn soft_delete_user(pool: &SqlitePool, id: UserId) {
    sqlx::query("UPDATE users SET deleted_at = ? WHERE id = ?")
        .bind(chrono::Utc::now().timestamp())
        .bind(i64::from(id))
        .execute(pool)
        .await
        .expect("Failed to soft delete user");
}

pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Send a request through the router and return status plus raw body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Which gateway call should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingOp {
    Count,
    Find,
    FindByEmail,
    FindById,
    Insert,
    HealthCheck,
}

/// Store that succeeds with empty results except for one failing operation
pub struct FailingStore {
    fail_on: FailingOp,
}

impl FailingStore {
    pub fn new(fail_on: FailingOp) -> Self {
        Self { fail_on }
    }

    fn check(&self, op: FailingOp) -> StoreResult<()> {
        if self.fail_on == op {
            Err(StoreError::unavailable(format!("{:?} unavailable", op)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn count(&self, _filter: &UserFilter) -> StoreResult<i64> {
        self.check(FailingOp::Count)?;
        Ok(0)
    }

    async fn find(&self, _filter: &UserFilter, _offset: i64, _limit: i64) -> StoreResult<Vec<User>> {
        self.check(FailingOp::Find)?;
        Ok(Vec::new())
    }

    async fn find_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
        self.check(FailingOp::FindByEmail)?;
        Ok(None)
    }

    async fn find_by_id(&self, _id: UserId) -> StoreResult<Option<User>> {
        self.check(FailingOp::FindById)?;
        Ok(None)
    }

    async fn insert(&self, _user: &NewUser) -> StoreResult<User> {
        self.check(FailingOp::Insert)?;
        Err(StoreError::query("insert not supported by FailingStore"))
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.check(FailingOp::HealthCheck)
    }
}

pub fn failing_app_state(fail_on: FailingOp) -> AppState {
    AppState::new(Arc::new(FailingStore::new(fail_on)))
}
