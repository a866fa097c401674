//! Role repository port.

use async_trait::async_trait;

use domain::{AdapterResult, RoleData};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only access to role reference rows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AdapterResult<Option<RoleData>>;

    async fn find_all(&self) -> AdapterResult<Vec<RoleData>>;
}
