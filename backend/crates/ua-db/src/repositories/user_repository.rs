//! User repository backed by SQLite.
//!
//! Every query carries `deleted_at IS NULL`; soft-deleted rows are never
//! returned and never count towards the email uniqueness index.
//!
//! Search is a case-insensitive substring match on `name` or `email`. The
//! `*_folded` columns are written with `fold_case` on insert and compared
//! with `instr` against the folded term, so the term is matched literally and
//! non-ASCII letters fold the same way they do in memory.

use crate::{DbError, Result as DbErrorResult};

use ua_core::{NewUser, StoreResult, User, UserFilter, UserId, UserStore, fold_case};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "id, email, name, created_at, updated_at, deleted_at";

const SEARCH_CLAUSE: &str = "(instr(name_folded, ?) > 0 OR instr(email_folded, ?) > 0)";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: UserId::try_from(r.id)
                .map_err(|e| DbError::decode(format!("users.id {}: {}", r.id, e)))?,
            email: r.email,
            name: r.name,
            created_at: timestamp(r.created_at, "users.created_at")?,
            updated_at: timestamp(r.updated_at, "users.updated_at")?,
            deleted_at: r
                .deleted_at
                .map(|ts| timestamp(ts, "users.deleted_at"))
                .transpose()?,
        })
    }
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::decode(format!("{} {} is not a valid timestamp", column, secs)))
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count_matching(&self, filter: &UserFilter) -> DbErrorResult<i64> {
        let count = match filter.search() {
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM users WHERE deleted_at IS NULL",
                )
                .fetch_one(&self.pool)
                .await?
            }
            Some(term) => {
                let folded = fold_case(term);
                let sql = format!(
                    "SELECT COUNT(*) FROM users WHERE deleted_at IS NULL AND {}",
                    SEARCH_CLAUSE
                );
                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(&folded)
                    .bind(&folded)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }

    pub async fn find_matching(
        &self,
        filter: &UserFilter,
        offset: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<User>> {
        let rows = match filter.search() {
            None => {
                let sql = format!(
                    "SELECT {} FROM users WHERE deleted_at IS NULL ORDER BY id LIMIT ? OFFSET ?",
                    USER_COLUMNS
                );
                sqlx::query_as::<_, UserRow>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(term) => {
                let folded = fold_case(term);
                let sql = format!(
                    "SELECT {} FROM users WHERE deleted_at IS NULL AND {} ORDER BY id LIMIT ? OFFSET ?",
                    USER_COLUMNS, SEARCH_CLAUSE
                );
                sqlx::query_as::<_, UserRow>(&sql)
                    .bind(&folded)
                    .bind(&folded)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(User::try_from).collect()
    }

    pub async fn find_active_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE email = ? AND deleted_at IS NULL",
            USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_active_by_id(&self, id: UserId) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE id = ? AND deleted_at IS NULL",
            USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let sql = format!(
            "INSERT INTO users (email, name, email_folded, name_folded, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {}",
            USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.email())
            .bind(user.name())
            .bind(fold_case(user.email()))
            .bind(fold_case(user.name()))
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        User::try_from(row)
    }

    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn count(&self, filter: &UserFilter) -> StoreResult<i64> {
        Ok(self.count_matching(filter).await?)
    }

    async fn find(&self, filter: &UserFilter, offset: i64, limit: i64) -> StoreResult<Vec<User>> {
        Ok(self.find_matching(filter, offset, limit).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.find_active_by_email(email).await?)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.find_active_by_id(id).await?)
    }

    async fn insert(&self, user: &NewUser) -> StoreResult<User> {
        Ok(self.create(user).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(self.ping().await?)
    }
}
