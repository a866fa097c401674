//! Role use cases - read-only access to role reference data.

use std::sync::Arc;

use async_trait::async_trait;

use common::{classify, AppResult, FailureResult, OptionExt};
use domain::RoleData;

use crate::repository::RoleRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const MSG_ROLE_NOT_FOUND: &str = "Role not found";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleUseCases: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<RoleData>;

    async fn find_all(&self) -> AppResult<Vec<RoleData>>;
}

pub struct RoleManager {
    repo: Arc<dyn RoleRepository>,
}

impl RoleManager {
    pub fn new(repo: Arc<dyn RoleRepository>) -> Self {
        Self { repo }
    }

    async fn try_find_by_name(&self, name: &str) -> FailureResult<RoleData> {
        Ok(self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_not_found(MSG_ROLE_NOT_FOUND)?)
    }
}

#[async_trait]
impl RoleUseCases for RoleManager {
    async fn find_by_name(&self, name: &str) -> AppResult<RoleData> {
        self.try_find_by_name(name).await.map_err(classify)
    }

    async fn find_all(&self) -> AppResult<Vec<RoleData>> {
        self.repo.find_all().await.map_err(|e| classify(e.into()))
    }
}
