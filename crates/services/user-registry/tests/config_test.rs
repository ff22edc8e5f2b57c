//! Environment-driven configuration.
//!
//! Kept to a single test so no other test in this binary races on the
//! process environment.

use std::env;

use user_registry_lib::config::RegistryConfig;

#[test]
fn test_from_env_keeps_url_credentials() {
    env::remove_var("USER_REGISTRY_DATABASE_URL");
    env::remove_var("DATABASE_USERNAME");
    env::remove_var("DATABASE_PASSWORD");

    env::set_var("DATABASE_URL", "postgres://alice:pw@db.internal:5432/users");
    let config = RegistryConfig::from_env();
    assert_eq!(
        config.database.connection_url().unwrap(),
        "postgres://alice:pw@db.internal:5432/users"
    );

    env::set_var("DATABASE_URL", "sqlite::memory:");
    let config = RegistryConfig::from_env();
    assert_eq!(config.database.connection_url().unwrap(), "sqlite::memory:");

    env::set_var("DATABASE_URL", "postgres://alice:pw@db.internal:5432/users");
    env::set_var("DATABASE_USERNAME", "bob");
    let config = RegistryConfig::from_env();
    assert_eq!(
        config.database.connection_url().unwrap(),
        "postgres://bob:pw@db.internal:5432/users"
    );

    env::remove_var("DATABASE_URL");
    env::remove_var("DATABASE_USERNAME");
}
