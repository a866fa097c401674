//! User use cases - Handles user-related business logic.
//!
//! Every public method runs its body as a `FailureResult` and hands the
//! outcome to `classify`, so validation failures surface as `BadRequest`
//! and adapter failures as a generic `InternalServerError`.

use async_trait::async_trait;
use std::sync::Arc;

use common::{classify, AppError, AppResult, FailureResult, OptionExt};
use domain::{
    validators, CreateUser, Pageable, PasswordEncryptor, User, UserData, UserReadOnly,
    UuidGenerator,
};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const MSG_EMAIL_TAKEN: &str = "There is already a user with this email";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const MSG_NOT_FOUND_BY_ID: &str = "User not found by id";
pub const MSG_NOT_FOUND_BY_EMAIL: &str = "User not found by email";
pub const MSG_PASSWORDS_DIFFER: &str =
    "Passwords do not match. Please make sure the password and confirm password are identical.";
pub const MSG_INVALID_NAME: &str = "Invalid name";

/// User use cases trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserUseCases: Send + Sync {
    /// Register a new user and return it without the password
    async fn create(&self, data: CreateUser) -> AppResult<UserReadOnly>;

    /// Verify credentials. Unknown email and wrong password fail identically.
    async fn compare_password(&self, email: &str, password: &str) -> AppResult<UserReadOnly>;

    async fn find_by_id(&self, id: &str) -> AppResult<UserReadOnly>;

    async fn find_by_email(&self, email: &str) -> AppResult<UserReadOnly>;

    /// Substring search on email, paged by the repository
    async fn find_all(&self, query: &str, pageable: &Pageable) -> AppResult<Vec<UserReadOnly>>;

    async fn update_password(
        &self,
        id: &str,
        new_password: &str,
        confirm_new_password: &str,
    ) -> AppResult<UserReadOnly>;

    async fn update_name(&self, id: &str, new_name: &str) -> AppResult<UserReadOnly>;
}

/// Concrete implementation of UserUseCases using repository and adapters.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    ids: Arc<dyn UuidGenerator>,
    encryptor: Arc<dyn PasswordEncryptor>,
}

impl UserManager {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        ids: Arc<dyn UuidGenerator>,
        encryptor: Arc<dyn PasswordEncryptor>,
    ) -> Self {
        Self {
            repo,
            ids,
            encryptor,
        }
    }

    async fn try_create(&self, data: CreateUser) -> FailureResult<UserReadOnly> {
        let CreateUser {
            name,
            email,
            password,
        } = data;

        let id = self.ids.generate().await?;
        let mut user = User::new(UserData {
            id,
            name,
            email,
            password,
        })?;

        if self.repo.exists_by_email(user.email()).await? {
            return Err(AppError::bad_request(MSG_EMAIL_TAKEN).into());
        }

        let hash = self.encryptor.encrypt(user.password()).await?;
        user.set_password_hash(hash)?;

        let created = self.repo.create(user.user_data()).await?;
        tracing::info!(user_id = %created.id, "User created");
        Ok(created)
    }

    async fn try_compare_password(&self, email: &str, password: &str) -> FailureResult<UserReadOnly> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            tracing::warn!("Rejected credentials: unknown email");
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS).into());
        };

        if !self.encryptor.compare(password, &user.password).await? {
            tracing::warn!(user_id = %user.id, "Rejected credentials: password mismatch");
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS).into());
        }

        Ok(UserReadOnly::from(user))
    }

    async fn try_find_by_id(&self, id: &str) -> FailureResult<UserReadOnly> {
        tracing::debug!(user_id = %id, "Looking up user by id");
        Ok(self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_NOT_FOUND_BY_ID)?)
    }

    async fn try_find_by_email(&self, email: &str) -> FailureResult<UserReadOnly> {
        tracing::debug!("Looking up user by email");
        Ok(self
            .repo
            .find_by_email(email)
            .await?
            .map(UserReadOnly::from)
            .ok_or_not_found(MSG_NOT_FOUND_BY_EMAIL)?)
    }

    async fn try_update_password(
        &self,
        id: &str,
        new_password: &str,
        confirm_new_password: &str,
    ) -> FailureResult<UserReadOnly> {
        if new_password != confirm_new_password {
            return Err(AppError::bad_request(MSG_PASSWORDS_DIFFER).into());
        }
        validators::password(new_password)?;

        self.try_find_by_id(id).await?;

        let hash = self.encryptor.encrypt(new_password).await?;
        let updated = self
            .repo
            .update_password(id, &hash)
            .await?
            .ok_or_not_found(MSG_NOT_FOUND_BY_ID)?;

        tracing::info!(user_id = %id, "Password updated");
        Ok(updated)
    }

    async fn try_update_name(&self, id: &str, new_name: &str) -> FailureResult<UserReadOnly> {
        if validators::not_empty(new_name, "name").is_err() {
            return Err(AppError::bad_request(MSG_INVALID_NAME).into());
        }

        self.try_find_by_id(id).await?;

        let updated = self
            .repo
            .update_name(id, new_name)
            .await?
            .ok_or_not_found(MSG_NOT_FOUND_BY_ID)?;

        tracing::info!(user_id = %id, "Name updated");
        Ok(updated)
    }
}

#[async_trait]
impl UserUseCases for UserManager {
    async fn create(&self, data: CreateUser) -> AppResult<UserReadOnly> {
        self.try_create(data).await.map_err(classify)
    }

    async fn compare_password(&self, email: &str, password: &str) -> AppResult<UserReadOnly> {
        self.try_compare_password(email, password)
            .await
            .map_err(classify)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<UserReadOnly> {
        self.try_find_by_id(id).await.map_err(classify)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<UserReadOnly> {
        self.try_find_by_email(email).await.map_err(classify)
    }

    async fn find_all(&self, query: &str, pageable: &Pageable) -> AppResult<Vec<UserReadOnly>> {
        self.repo
            .find_all(query, pageable)
            .await
            .map_err(|e| classify(e.into()))
    }

    async fn update_password(
        &self,
        id: &str,
        new_password: &str,
        confirm_new_password: &str,
    ) -> AppResult<UserReadOnly> {
        self.try_update_password(id, new_password, confirm_new_password)
            .await
            .map_err(classify)
    }

    async fn update_name(&self, id: &str, new_name: &str) -> AppResult<UserReadOnly> {
        self.try_update_name(id, new_name).await.map_err(classify)
    }
}
