//! Permission use cases - grant, query and revoke role assignments.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;

use common::{classify, AppError, AppResult, FailureResult};
use domain::{
    validators, CreatePermission, Permission, PermissionData, RoleKind, UuidGenerator,
    ValidationResult,
};

use crate::repository::PermissionRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const MSG_NO_PERMISSIONS: &str = "No permissions found for this user";
pub const MSG_PERMISSION_NOT_FOUND: &str = "Permission not found";

fn already_granted(role: &str) -> AppError {
    AppError::bad_request(format!("The user already has {} permission", role))
}

/// Field checks for one request, in the entity's order: user id, then role.
fn parse_request(request: CreatePermission) -> ValidationResult<(String, RoleKind)> {
    validators::uuid(&request.user_id)?;
    let role = validators::role(&request.role)?;
    Ok((request.user_id, role))
}

/// First `(user id, role)` pair that already appeared earlier in the batch.
fn repeated_entry(entries: &[(String, RoleKind)]) -> Option<RoleKind> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .find(|(user_id, role)| !seen.insert((user_id.as_str(), *role)))
        .map(|(_, role)| *role)
}

/// Permission use cases trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PermissionUseCases: Send + Sync {
    /// Grant a batch of roles. One duplicate aborts the whole batch.
    async fn create_permissions(
        &self,
        requests: Vec<CreatePermission>,
    ) -> AppResult<Vec<PermissionData>>;

    async fn exists_permission(&self, user_id: &str, role: &str) -> AppResult<bool>;

    /// Every permission of a user. An empty result is `NotFound`.
    async fn find_permissions_by_user(&self, user_id: &str) -> AppResult<Vec<PermissionData>>;

    async fn delete_permission(&self, user_id: &str, role: &str) -> AppResult<()>;
}

/// Concrete implementation of PermissionUseCases using repository.
pub struct PermissionManager {
    repo: Arc<dyn PermissionRepository>,
    ids: Arc<dyn UuidGenerator>,
}

impl PermissionManager {
    pub fn new(repo: Arc<dyn PermissionRepository>, ids: Arc<dyn UuidGenerator>) -> Self {
        Self { repo, ids }
    }

    async fn try_create_permissions(
        &self,
        requests: Vec<CreatePermission>,
    ) -> FailureResult<Vec<PermissionData>> {
        let entries = requests
            .into_iter()
            .map(parse_request)
            .collect::<ValidationResult<Vec<_>>>()?;

        if let Some(role) = repeated_entry(&entries) {
            return Err(already_granted(role.as_str()).into());
        }

        // Checks fan out; the first failure drops the remaining futures
        // before any of them reaches the repository.
        let batch = try_join_all(
            entries
                .into_iter()
                .map(|(user_id, role)| self.prepare(user_id, role)),
        )
        .await?;

        let created = self.repo.create_permissions(batch).await?;
        tracing::info!(count = created.len(), "Permissions granted");
        Ok(created)
    }

    /// Existence check, id generation and entity construction for one entry.
    async fn prepare(&self, user_id: String, role: RoleKind) -> FailureResult<PermissionData> {
        if self.repo.exists_permission(&user_id, role).await? {
            return Err(already_granted(role.as_str()).into());
        }

        let id = self.ids.generate().await?;
        let permission = Permission::new(id, user_id, role.as_str())?;
        Ok(permission.permission_data())
    }

    async fn try_exists_permission(&self, user_id: &str, role: &str) -> FailureResult<bool> {
        let role = validators::role(role)?;
        Ok(self.repo.exists_permission(user_id, role).await?)
    }

    async fn try_find_permissions_by_user(&self, user_id: &str) -> FailureResult<Vec<PermissionData>> {
        tracing::debug!(user_id = %user_id, "Looking up permissions");
        let permissions = self.repo.find_permissions_by_user(user_id).await?;

        if permissions.is_empty() {
            return Err(AppError::not_found(MSG_NO_PERMISSIONS).into());
        }

        Ok(permissions)
    }

    async fn try_delete_permission(&self, user_id: &str, role: &str) -> FailureResult<()> {
        let role = validators::role(role)?;

        if !self.repo.exists_permission(user_id, role).await? {
            return Err(AppError::bad_request(MSG_PERMISSION_NOT_FOUND).into());
        }

        self.repo.delete_permission(user_id, role).await?;
        tracing::info!(user_id = %user_id, role = %role, "Permission revoked");
        Ok(())
    }
}

#[async_trait]
impl PermissionUseCases for PermissionManager {
    async fn create_permissions(
        &self,
        requests: Vec<CreatePermission>,
    ) -> AppResult<Vec<PermissionData>> {
        self.try_create_permissions(requests)
            .await
            .map_err(classify)
    }

    async fn exists_permission(&self, user_id: &str, role: &str) -> AppResult<bool> {
        self.try_exists_permission(user_id, role)
            .await
            .map_err(classify)
    }

    async fn find_permissions_by_user(&self, user_id: &str) -> AppResult<Vec<PermissionData>> {
        self.try_find_permissions_by_user(user_id)
            .await
            .map_err(classify)
    }

    async fn delete_permission(&self, user_id: &str, role: &str) -> AppResult<()> {
        self.try_delete_permission(user_id, role)
            .await
            .map_err(classify)
    }
}
