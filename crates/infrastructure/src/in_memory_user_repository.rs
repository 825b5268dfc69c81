use std::collections::HashMap;

use async_trait::async_trait;
use presyohan_application::UserRepository;
use presyohan_core::AppResult;
use presyohan_domain::User;
use tokio::sync::RwLock;

/// In-memory user repository implementation keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a repository seeded with the given users.
    ///
    /// A later user with the same email replaces an earlier one.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(
                users
                    .into_iter()
                    .map(|user| (user.email.clone(), user))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;

        let mut values: Vec<User> = users.values().cloned().collect();
        values.sort_by(|left, right| left.email.cmp(&right.email));

        Ok(values)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[cfg(test)]
mod tests;
