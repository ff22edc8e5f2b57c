//! Unified error handling for the store and service layers.
//!
//! - [`StoreError`] is raised by the record store and always wraps the
//!   underlying database failure.
//! - [`AppError`] is what the service hands to its callers: validation
//!   failures, absence translated into `NotFound`, or a store error passed
//!   through unchanged.

use domain::{DomainError, UserId};
use sea_orm::DbErr;
use thiserror::Error;

// =============================================================================
// Store errors
// =============================================================================

/// Persistence failures. Every variant is raised after the transaction has
/// been rolled back, so no partial write is ever committed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create user")]
    Creation(#[source] DbErr),

    #[error("Failed to read users")]
    Read(#[source] DbErr),

    #[error("Failed to update user {id}")]
    Update {
        id: UserId,
        #[source]
        source: DbErr,
    },

    #[error("Failed to delete user {id}")]
    Deletion {
        id: UserId,
        #[source]
        source: DbErr,
    },
}

impl StoreError {
    /// Stable identifier for this failure kind
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Creation(_) => "CREATION_ERROR",
            StoreError::Read(_) => "READ_ERROR",
            StoreError::Update { .. } => "UPDATE_ERROR",
            StoreError::Deletion { .. } => "DELETION_ERROR",
        }
    }

    /// Underlying database failure
    pub fn cause(&self) -> &DbErr {
        match self {
            StoreError::Creation(e) | StoreError::Read(e) => e,
            StoreError::Update { source, .. } | StoreError::Deletion { source, .. } => source,
        }
    }

    pub fn update(id: UserId, source: DbErr) -> Self {
        StoreError::Update { id, source }
    }

    pub fn deletion(id: UserId, source: DbErr) -> Self {
        StoreError::Deletion { id, source }
    }
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Service errors
// =============================================================================

/// Errors returned by the user service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before reaching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No user with this id
    #[error("User with id {0} not found")]
    NotFound(UserId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Get error code for the caller
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(e) => e.code(),
        }
    }

    /// Get user-facing message (hides database details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => self.to_string(),
            AppError::Store(e) => format!("{e}: a database error occurred"),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::InvalidInput(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for turning store absence into `NotFound`
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T> {
        self.ok_or(AppError::NotFound(id))
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Database URL scheme '{0}' does not accept credentials")]
    CredentialsNotSupported(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn db_err() -> DbErr {
        DbErr::Custom("connection reset".to_string())
    }

    #[test]
    fn test_store_error_codes() {
        assert_eq!(StoreError::Creation(db_err()).code(), "CREATION_ERROR");
        assert_eq!(StoreError::Read(db_err()).code(), "READ_ERROR");
        assert_eq!(StoreError::update(1, db_err()).code(), "UPDATE_ERROR");
        assert_eq!(StoreError::deletion(1, db_err()).code(), "DELETION_ERROR");
    }

    #[test]
    fn test_store_error_keeps_cause() {
        let err = StoreError::update(4, db_err());
        assert_eq!(err.to_string(), "Failed to update user 4");
        assert!(matches!(err.cause(), DbErr::Custom(msg) if msg == "connection reset"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_store_error_passes_through_app_error() {
        let err = AppError::from(StoreError::Read(db_err()));
        assert_eq!(err.code(), "READ_ERROR");
        assert_eq!(err.to_string(), "Failed to read users");
        assert_eq!(
            err.user_message(),
            "Failed to read users: a database error occurred"
        );
    }

    #[test]
    fn test_domain_validation_becomes_invalid_input() {
        let err = AppError::from(DomainError::validation("Name must not be empty"));
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg == "Name must not be empty"));
        assert_eq!(err.code(), "INVALID_INPUT");
        assert_eq!(err.user_message(), "Invalid input: Name must not be empty");
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found(99).unwrap_err();
        assert!(matches!(err, AppError::NotFound(99)));
        assert_eq!(err.user_message(), "User with id 99 not found");

        assert_eq!(Some(5).ok_or_not_found(1).unwrap(), 5);
    }
}
