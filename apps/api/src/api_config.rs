use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use presyohan_core::AppError;
use presyohan_domain::EmailAddress;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum UserStoreConfig {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub user_store: UserStoreConfig,
    pub seed_emails: Vec<EmailAddress>,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let user_store = match env::var("USER_STORE")
            .unwrap_or_else(|_| "postgres".to_owned())
            .as_str()
        {
            "postgres" => UserStoreConfig::Postgres {
                database_url: required_non_empty_env("DATABASE_URL")?,
            },
            "memory" => UserStoreConfig::Memory,
            other => {
                return Err(AppError::Validation(format!(
                    "USER_STORE must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        let seed_emails =
            parse_seed_emails(env::var("DEV_SEED_USER_EMAILS").unwrap_or_default().as_str())?;

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        Ok(Self {
            migrate_only,
            user_store,
            seed_emails,
            frontend_url,
            api_host,
            api_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Parses a comma-separated email list, skipping blank entries.
fn parse_seed_emails(value: &str) -> Result<Vec<EmailAddress>, AppError> {
    value
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            EmailAddress::new(entry).map_err(|error| {
                AppError::Validation(format!("invalid DEV_SEED_USER_EMAILS entry: {error}"))
            })
        })
        .collect()
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}
