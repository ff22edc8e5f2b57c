//! Shared fixtures for integration tests.

use std::sync::Arc;

use common::DatabaseConfig;
use user_registry_lib::infra::Database;
use user_registry_lib::repository::UserStore;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database.
pub async fn test_database() -> Database {
    let config = DatabaseConfig::new("sqlite::memory:", "", "").with_pool(1, 1);
    Database::connect(&config)
        .await
        .expect("in-memory database should open")
}

#[allow(dead_code)]
pub fn store(db: &Database) -> Arc<UserStore> {
    Arc::new(UserStore::new(db.get_connection()))
}
