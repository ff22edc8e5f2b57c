//! Common utilities shared by the registry crates.
//!
//! This crate provides:
//! - Layered error types for the store and the service
//! - Database configuration

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ConfigError, OptionExt, StoreError, StoreResult};
