//! User Registry Library
//!
//! Console application for managing user records, layered as
//! shell → service (validation) → repository (transactional persistence).

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod shell;

use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;

use crate::config::RegistryConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};
use crate::shell::Shell;

/// Wire the repository and service on top of an open database.
pub fn build_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo))
}

/// Run the interactive shell on stdin/stdout.
pub async fn run_shell(config: RegistryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let service = build_service(&db);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut shell = Shell::new(service, stdin, tokio::io::stdout());
    shell.run().await?;

    db.close().await?;
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: RegistryConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
