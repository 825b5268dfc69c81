//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use presyohan_application::UserRepository;
use presyohan_core::{AppError, AppResult};
use presyohan_domain::{User, UserId};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    email: String,
    name: Option<String>,
    avatar_url: Option<String>,
    phone: Option<String>,
    user_code: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            email: row.email,
            name: row.name,
            avatar_url: row.avatar_url,
            phone: row.phone,
            user_code: row.user_code,
            created_at: row.created_at,
        }
    }
}

mod lookup;

#[cfg(test)]
mod tests;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_all_impl().await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_by_email_impl(email).await
    }
}

fn store_unavailable(error: sqlx::Error, operation: &str) -> AppError {
    AppError::StoreUnavailable(format!("failed to {operation}: {error}"))
}
