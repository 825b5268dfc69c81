//! User lookup ports and application service.
//!
//! The service is a read-only pass-through: it owns no state and forwards
//! every call to the injected repository, returning its result (or error)
//! unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use presyohan_core::AppResult;
use presyohan_domain::User;

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every stored user in store-defined order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Finds a user by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

// ---------------------------------------------------------------------------
// Service contract
// ---------------------------------------------------------------------------

/// Read operations exposed to the controller layer.
#[async_trait]
pub trait UserLookupService: Send + Sync {
    /// Returns every user known to the store.
    ///
    /// An empty store yields an empty vector. Store failures surface as
    /// `AppError::StoreUnavailable`.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Returns the user with exactly this email, or `None`.
    ///
    /// The email is not validated here.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for user lookups.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserLookupService for UserService {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.user_repository.find_by_email(email).await
    }
}
