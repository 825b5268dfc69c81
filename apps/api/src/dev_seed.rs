use chrono::Utc;
use presyohan_core::{AppError, AppResult};
use presyohan_domain::{EmailAddress, User, UserId};
use sqlx::PgPool;
use tracing::info;

/// Builds in-memory users for the given seed emails.
pub fn seed_users(emails: &[EmailAddress]) -> Vec<User> {
    let created_at = Utc::now();

    emails
        .iter()
        .map(|email| User::new(UserId::new(), email.clone(), created_at))
        .collect()
}

/// Inserts any seed emails missing from `app_users`.
pub async fn ensure_seed_users(pool: &PgPool, emails: &[EmailAddress]) -> AppResult<()> {
    for email in emails {
        let inserted = sqlx::query(
            r#"
            INSERT INTO app_users (email)
            VALUES ($1)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email.as_str())
        .execute(pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to ensure seed user exists for '{email}': {error}"
            ))
        })?;

        if inserted.rows_affected() > 0 {
            info!(%email, "seeded dev user");
        }
    }

    Ok(())
}
