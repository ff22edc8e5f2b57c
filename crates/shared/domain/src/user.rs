//! User domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Identifier assigned by the store on first persistence
pub type UserId = i64;

/// Rejects names that are empty or whitespace only.
fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A user that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Display name, must not be blank
    #[validate(custom(function = "validate_not_blank", message = "Name must not be empty"))]
    pub name: String,
    /// Email address, format is not checked
    pub email: String,
    /// Age in years, must be positive
    #[validate(range(min = 1, message = "Age must be greater than 0"))]
    pub age: i32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// User domain entity
///
/// The `id` is assigned by the store and never changes afterwards. The other
/// fields may be edited in place and written back through an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: UserId,
    #[validate(custom(function = "validate_not_blank", message = "Name must not be empty"))]
    pub name: String,
    pub email: String,
    #[validate(range(min = 1, message = "Age must be greater than 0"))]
    pub age: i32,
}

impl User {
    /// Attach a store-assigned id to a transient user
    pub fn from_new(id: UserId, user: NewUser) -> Self {
        Self {
            id,
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>, age {}", self.id, self.name, self.email, self.age)
    }
}
