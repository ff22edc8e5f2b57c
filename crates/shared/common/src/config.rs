//! Shared configuration structures.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Default connection URL for local development
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/user_db";

/// Database configuration.
///
/// Credentials may be embedded in `url` or given separately; separate ones
/// are spliced in by [`DatabaseConfig::connection_url`].
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// Build a configuration from explicit connection parameters.
    ///
    /// Used to point the store at an isolated database (tests, one-off tools)
    /// without touching the environment.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Set pool bounds
    pub fn with_pool(mut self, min_connections: u32, max_connections: u32) -> Self {
        self.min_connections = min_connections;
        self.max_connections = max_connections;
        self
    }

    /// URL handed to the driver, with credentials applied.
    ///
    /// Only non-empty credentials replace what the URL already carries. With
    /// neither set the URL is used exactly as configured, which keeps URLs
    /// such as `sqlite::memory:` usable.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if self.username.is_empty() && self.password.is_empty() {
            return Ok(self.url.clone());
        }

        let mut url = Url::parse(&self.url)?;
        let scheme = url.scheme().to_string();
        if !self.username.is_empty() {
            url.set_username(&self.username)
                .map_err(|()| ConfigError::CredentialsNotSupported(scheme.clone()))?;
        }
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|()| ConfigError::CredentialsNotSupported(scheme))?;
        }

        Ok(url.into())
    }
}
