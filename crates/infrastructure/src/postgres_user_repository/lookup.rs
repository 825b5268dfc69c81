use tracing::debug;

use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_all_impl(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, avatar_url, phone, user_code, created_at
            FROM app_users
            ORDER BY created_at, email
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| store_unavailable(error, "list users"))?;

        debug!(count = rows.len(), "listed users");
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub(super) async fn find_by_email_impl(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, avatar_url, phone, user_code, created_at
            FROM app_users
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| store_unavailable(error, "find user by email"))?;

        debug!(found = row.is_some(), "looked up user by email");
        Ok(row.map(User::from))
    }
}
