//! User service - Handles user-related business logic.
//!
//! Validates input before it reaches the store and is the single place
//! where "no such user" becomes an error.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{DomainError, NewUser, User, UserId, Validate};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and persist a new user
    async fn add_user(&self, user: NewUser) -> AppResult<User>;

    /// Get user by ID, `NotFound` if absent
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Validate and write back an edited user, `NotFound` if absent
    async fn update_user(&self, user: User) -> AppResult<User>;

    /// Delete user, `false` when there was nothing to delete
    async fn delete_user(&self, id: UserId) -> AppResult<bool>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn add_user(&self, user: NewUser) -> AppResult<User> {
        user.validate().map_err(DomainError::from)?;
        Ok(self.repo.create(user).await?)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found(id)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.find_all().await?)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        // Same rules as creation
        user.validate().map_err(DomainError::from)?;

        let id = user.id;
        self.repo.update(user).await?.ok_or_not_found(id)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<bool> {
        Ok(self.repo.delete_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    use common::{AppError, StoreError};

    use super::*;
    use crate::repository::MockUserRepository;

    fn create_test_user(id: UserId) -> User {
        User::from_new(id, NewUser::new("Petr", "petr@test.com", 30))
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_add_user_delegates_to_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(NewUser::new("Ivan", "ivan@test.com", 25)))
            .times(1)
            .returning(|user| Ok(User::from_new(1, user)));

        let user = service(repo)
            .add_user(NewUser::new("Ivan", "ivan@test.com", 25))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ivan");
    }

    #[tokio::test]
    async fn test_add_user_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let mut repo = MockUserRepository::new();
            repo.expect_create().never();

            let result = service(repo)
                .add_user(NewUser::new(name, "ivan@test.com", 25))
                .await;

            assert!(matches!(result, Err(AppError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_add_user_rejects_non_positive_age() {
        for age in [0, -5] {
            let mut repo = MockUserRepository::new();
            repo.expect_create().never();

            let result = service(repo)
                .add_user(NewUser::new("Ivan", "ivan@test.com", age))
                .await;

            assert!(matches!(result, Err(AppError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_add_user_passes_store_error_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(StoreError::Creation(DbErr::Custom("disk full".to_string()))));

        let result = service(repo)
            .add_user(NewUser::new("Ivan", "ivan@test.com", 25))
            .await;

        assert!(matches!(result, Err(AppError::Store(StoreError::Creation(_)))));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(create_test_user(id))));

        let user = service(repo).get_user(1).await.unwrap();

        assert_eq!(user.name, "Petr");
        assert_eq!(user.email, "petr@test.com");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(99).await;

        assert!(matches!(result, Err(AppError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_get_user_read_error_is_not_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(StoreError::Read(DbErr::Custom("timeout".to_string()))));

        let result = service(repo).get_user(1).await;

        assert!(matches!(result, Err(AppError::Store(StoreError::Read(_)))));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![User::from_new(1, NewUser::new("Katya", "katya@test.com", 22))]));

        let users = service(repo).list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Katya");
    }

    #[tokio::test]
    async fn test_update_user_delegates_to_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|user| Ok(Some(user)));

        let mut user = create_test_user(1);
        user.name = "Petr Ivanov".to_string();
        let updated = service(repo).update_user(user).await.unwrap();

        assert_eq!(updated.name, "Petr Ivanov");
    }

    #[tokio::test]
    async fn test_update_user_revalidates() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().never();

        let mut user = create_test_user(1);
        user.age = 0;

        let result = service(repo).update_user(user).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_update_user_missing_row_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_| Ok(None));

        let result = service(repo).update_user(create_test_user(42)).await;

        assert!(matches!(result, Err(AppError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(repo).delete_user(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_an_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(false));

        assert!(!service(repo).delete_user(404).await.unwrap());
    }
}
