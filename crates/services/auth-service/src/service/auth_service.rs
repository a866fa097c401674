//! Authentication use cases - registration with roles and token issuance.
//!
//! Registration is two independent writes: the user row, then its
//! permissions. A failure in the second step leaves the user in place
//! without permissions; the error is still reported to the caller.

use async_trait::async_trait;
use std::sync::Arc;

use common::{classify, AppError, AppResult, FailureResult};
use domain::{CreatePermission, CreateUser, Credentials, RoleKind, TokenPayload, UserReadOnly};
use permission_service_lib::PermissionUseCases;
use user_service_lib::UserUseCases;

use crate::token::{Claims, TokenGenerator};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const MSG_INVALID_TOKEN: &str = "Invalid or expired token";

/// Authentication use cases trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthUseCases: Send + Sync {
    /// Register a user holding the STANDARD role
    async fn create_user_with_standard_permission(&self, data: CreateUser) -> AppResult<UserReadOnly>;

    /// Register a user holding the ADMIN role
    async fn create_user_with_admin_permission(&self, data: CreateUser) -> AppResult<UserReadOnly>;

    /// Register a user holding every role
    async fn create_user_with_all_permissions(&self, data: CreateUser) -> AppResult<UserReadOnly>;

    /// Check credentials and mint a token carrying the user's roles
    async fn auth_user(&self, credentials: Credentials) -> AppResult<TokenPayload>;

    /// Read back the claims of a previously issued token
    async fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthUseCases over the user and permission use cases.
pub struct Authenticator {
    users: Arc<dyn UserUseCases>,
    permissions: Arc<dyn PermissionUseCases>,
    tokens: Arc<dyn TokenGenerator>,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserUseCases>,
        permissions: Arc<dyn PermissionUseCases>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            users,
            permissions,
            tokens,
        }
    }

    async fn create(&self, data: CreateUser, roles: &[RoleKind]) -> FailureResult<UserReadOnly> {
        let user = self.users.create(data).await?;

        let requests = roles
            .iter()
            .map(|role| CreatePermission::new(user.id.clone(), role.as_str()))
            .collect();

        if let Err(e) = self.permissions.create_permissions(requests).await {
            tracing::warn!(user_id = %user.id, error = %e, "User created without permissions");
            return Err(e.into());
        }

        tracing::info!(user_id = %user.id, roles = ?roles, "User registered");
        Ok(user)
    }

    async fn try_auth_user(&self, credentials: Credentials) -> FailureResult<TokenPayload> {
        let user = self
            .users
            .compare_password(&credentials.email, &credentials.password)
            .await?;

        let roles = self
            .permissions
            .find_permissions_by_user(&user.id)
            .await?
            .into_iter()
            .map(|permission| permission.role.to_string())
            .collect();

        let payload = self
            .tokens
            .generate_token(&user.name, &user.email, roles)
            .await?;

        tracing::info!(user_id = %user.id, "Token issued");
        Ok(payload)
    }

    async fn try_verify_token(&self, token: &str) -> FailureResult<Claims> {
        self.tokens.get_payload(token).await.map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            AppError::unauthorized(MSG_INVALID_TOKEN).into()
        })
    }
}

#[async_trait]
impl AuthUseCases for Authenticator {
    async fn create_user_with_standard_permission(&self, data: CreateUser) -> AppResult<UserReadOnly> {
        self.create(data, &[RoleKind::Standard])
            .await
            .map_err(classify)
    }

    async fn create_user_with_admin_permission(&self, data: CreateUser) -> AppResult<UserReadOnly> {
        self.create(data, &[RoleKind::Admin]).await.map_err(classify)
    }

    async fn create_user_with_all_permissions(&self, data: CreateUser) -> AppResult<UserReadOnly> {
        self.create(data, &RoleKind::ALL).await.map_err(classify)
    }

    async fn auth_user(&self, credentials: Credentials) -> AppResult<TokenPayload> {
        self.try_auth_user(credentials).await.map_err(classify)
    }

    async fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.try_verify_token(token).await.map_err(classify)
    }
}
