//! User registry configuration.

use std::env;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL};

/// User registry configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Connection parameters for the users database
    pub database: DatabaseConfig,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        let database = DatabaseConfig {
            url: env::var("USER_REGISTRY_DATABASE_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            username: env::var("DATABASE_USERNAME").unwrap_or(defaults.username),
            password: env::var("DATABASE_PASSWORD").unwrap_or(defaults.password),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
        };

        Self { database }
    }
}
