//! Permission repository port.

use async_trait::async_trait;

use domain::{AdapterResult, PermissionData, RoleKind};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Permission persistence, keyed by `(user id, role)`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Insert a validated batch. Implementations insert all or nothing.
    async fn create_permissions(
        &self,
        permissions: Vec<PermissionData>,
    ) -> AdapterResult<Vec<PermissionData>>;

    async fn exists_permission(&self, user_id: &str, role: RoleKind) -> AdapterResult<bool>;

    async fn find_permissions_by_user(&self, user_id: &str) -> AdapterResult<Vec<PermissionData>>;

    async fn delete_permission(&self, user_id: &str, role: RoleKind) -> AdapterResult<()>;
}
