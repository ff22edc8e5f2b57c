//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{NewUser, User, UserId};

// Callers validate through the derive without importing validator themselves.
pub use validator::Validate;
