//! User repository port.

use async_trait::async_trait;

use domain::{AdapterResult, Pageable, UserData, UserReadOnly};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence consumed by the user use cases.
///
/// Query methods return the read-only projection, except `find_by_email`,
/// which returns the full record (password hash included) for credential
/// checks. Callers must strip it before exposing the result.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user (password already encrypted)
    async fn create(&self, user: UserData) -> AdapterResult<UserReadOnly>;

    async fn exists_by_email(&self, email: &str) -> AdapterResult<bool>;

    async fn find_by_id(&self, id: &str) -> AdapterResult<Option<UserReadOnly>>;

    /// Find the full user record, password hash included
    async fn find_by_email(&self, email: &str) -> AdapterResult<Option<UserData>>;

    /// Users whose email contains `query`, ordered and paged per `pageable`
    async fn find_all(&self, query: &str, pageable: &Pageable) -> AdapterResult<Vec<UserReadOnly>>;

    /// Replace the stored hash; `None` when no user has this id
    async fn update_password(&self, id: &str, password_hash: &str)
        -> AdapterResult<Option<UserReadOnly>>;

    /// Replace the display name; `None` when no user has this id
    async fn update_name(&self, id: &str, name: &str) -> AdapterResult<Option<UserReadOnly>>;
}
