use std::sync::Arc;

use presyohan_application::{UserRepository, UserService};
use presyohan_core::AppError;
use presyohan_infrastructure::{InMemoryUserRepository, PostgresUserRepository};
use tracing::info;

use crate::api_config::{ApiConfig, UserStoreConfig};
use crate::dev_seed;
use crate::state::AppState;

use super::connect_and_migrate;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let user_repository = build_user_repository(config).await?;

    Ok(AppState {
        user_service: Arc::new(UserService::new(user_repository)),
    })
}

async fn build_user_repository(config: &ApiConfig) -> Result<Arc<dyn UserRepository>, AppError> {
    match &config.user_store {
        UserStoreConfig::Postgres { database_url } => {
            let pool = connect_and_migrate(database_url).await?;
            dev_seed::ensure_seed_users(&pool, &config.seed_emails).await?;
            info!(seeded = config.seed_emails.len(), "using postgres user store");
            Ok(Arc::new(PostgresUserRepository::new(pool)))
        }
        UserStoreConfig::Memory => {
            info!(seeded = config.seed_emails.len(), "using in-memory user store");
            Ok(Arc::new(InMemoryUserRepository::with_users(
                dev_seed::seed_users(&config.seed_emails),
            )))
        }
    }
}
