//! User repository implementation.
//!
//! Every operation runs inside its own database transaction: begin, run the
//! statements, then commit on success or roll back on failure before the
//! error is returned. A transaction that is dropped without either (panic,
//! cancelled future) is rolled back by the driver.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use super::entities::user::{self, update_columns, ActiveModel, Entity as UserEntity};
use common::{StoreError, StoreResult};
use domain::{NewUser, User, UserId};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence is never an error here: lookups return `None`, updates of a
/// missing row return `None` and deletes of a missing row return `false`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> StoreResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// List all users, in no particular order
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Overwrite name, email and age of the row with `user.id`
    async fn update(&self, user: User) -> StoreResult<Option<User>>;

    /// Delete user by ID, returns whether a row was removed
    async fn delete_by_id(&self, id: UserId) -> StoreResult<bool>;
}

type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>;

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run `f` as one unit of work.
    async fn in_transaction<F, T>(&self, f: F) -> Result<T, DbErr>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await?;

        match f(&txn).await {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let active = ActiveModel::from(user);

        let model = self
            .in_transaction(move |txn| Box::pin(async move { active.insert(txn).await }))
            .await
            .map_err(|e| {
                tracing::error!("Failed to create user: {}", e);
                StoreError::Creation(e)
            })?;

        tracing::info!(user_id = model.id, "User created");
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let result = self
            .in_transaction(move |txn| {
                Box::pin(async move { UserEntity::find_by_id(id).one(txn).await })
            })
            .await
            .map_err(|e| {
                tracing::error!(user_id = id, "Failed to read user: {}", e);
                StoreError::Read(e)
            })?;

        tracing::debug!(user_id = id, found = result.is_some(), "User lookup");
        Ok(result.map(User::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let models = self
            .in_transaction(|txn| Box::pin(async move { UserEntity::find().all(txn).await }))
            .await
            .map_err(|e| {
                tracing::error!("Failed to read users: {}", e);
                StoreError::Read(e)
            })?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: User) -> StoreResult<Option<User>> {
        let id = user.id;
        let columns = update_columns(user.clone());

        let result = self
            .in_transaction(move |txn| {
                Box::pin(async move {
                    UserEntity::update_many()
                        .set(columns)
                        .filter(user::Column::Id.eq(id))
                        .exec(txn)
                        .await
                })
            })
            .await
            .map_err(|e| {
                tracing::error!(user_id = id, "Failed to update user: {}", e);
                StoreError::update(id, e)
            })?;

        if result.rows_affected == 0 {
            tracing::warn!(user_id = id, "Update of a non-existent user");
            return Ok(None);
        }

        tracing::info!(user_id = id, "User updated");
        Ok(Some(user))
    }

    async fn delete_by_id(&self, id: UserId) -> StoreResult<bool> {
        let result = self
            .in_transaction(move |txn| {
                Box::pin(async move { UserEntity::delete_by_id(id).exec(txn).await })
            })
            .await
            .map_err(|e| {
                tracing::error!(user_id = id, "Failed to delete user: {}", e);
                StoreError::deletion(id, e)
            })?;

        if result.rows_affected == 0 {
            tracing::warn!(user_id = id, "Attempt to delete a non-existent user");
            return Ok(false);
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(true)
    }
}

